use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use primehash::{HuffmanCost, MinHeap, Queue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

const SEED: u64 = 7;

fn generate_values(size: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..size).map(|_| rng.gen_range(0..1_000_000)).collect()
}

fn bench_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap");

    for size in [1000, 10000].iter() {
        let values = generate_values(*size);

        group.bench_with_input(BenchmarkId::new("ours_heapify_drain", size), size, |b, _| {
            b.iter(|| black_box(MinHeap::from_vec(values.clone()).into_sorted_vec()))
        });

        group.bench_with_input(BenchmarkId::new("std_heapify_drain", size), size, |b, _| {
            b.iter(|| {
                let heap: BinaryHeap<Reverse<u64>> = values.iter().copied().map(Reverse).collect();
                black_box(heap.into_sorted_vec())
            })
        });

        group.bench_with_input(BenchmarkId::new("ours_push_pop", size), size, |b, _| {
            b.iter(|| {
                let mut heap = MinHeap::new();
                for &v in &values {
                    heap.push(v);
                }
                while let Ok(v) = heap.pop() {
                    black_box(v);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("huffman", size), size, |b, _| {
            b.iter(|| black_box(HuffmanCost::build(values.clone()).map(|h| h.cost())))
        });
    }

    group.finish();
}

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");

    group.bench_function("ours_fill_drain", |b| {
        b.iter(|| {
            let mut queue = Queue::new();
            queue.extend(0..10_000u32);
            while let Some(v) = queue.dequeue() {
                black_box(v);
            }
        })
    });

    group.bench_function("std_fill_drain", |b| {
        b.iter(|| {
            let mut queue: VecDeque<u32> = (0..10_000u32).collect();
            while let Some(v) = queue.pop_front() {
                black_box(v);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_heap, bench_queue);
criterion_main!(benches);
