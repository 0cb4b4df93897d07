use primehash::{HashMap, HashSet, HashTable, MinHeap, Queue, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

const SEED: u64 = 0x5eed;
const OPERATIONS: usize = 5000;

#[test]
fn test_table_matches_std_hash_set() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut ours: HashSet<u32> = HashTable::default();
    let mut std_set = std::collections::HashSet::new();

    for _ in 0..OPERATIONS {
        let key = rng.gen_range(0..500u32);
        match rng.gen_range(0..3) {
            0 | 1 => assert_eq!(ours.insert_unique(key), std_set.insert(key)),
            _ => assert_eq!(ours.erase(&key), usize::from(std_set.remove(&key))),
        }
        assert_eq!(ours.len(), std_set.len());
    }

    for key in 0..500u32 {
        assert_eq!(ours.has_key(&key), std_set.contains(&key));
    }
    assert!(ours.check_invariants());
    assert!(ours.check_unique_keys().is_ok());
}

#[test]
fn test_map_matches_std_hash_map() {
    let mut rng = StdRng::seed_from_u64(SEED + 1);
    let mut ours: HashMap<String, u64> = HashMap::new();
    let mut std_map = std::collections::HashMap::new();

    for _ in 0..OPERATIONS {
        let key = format!("key_{}", rng.gen_range(0..300));
        let amount = rng.gen_range(1..10u64);
        match rng.gen_range(0..4) {
            0 => {
                let fresh = !std_map.contains_key(&key);
                if fresh {
                    std_map.insert(key.clone(), amount);
                }
                assert_eq!(ours.insert(key, amount).is_ok(), fresh);
            }
            1 => assert_eq!(ours.erase(key.as_str()), std_map.remove(&key).map_or(0, |_| 1)),
            _ => {
                *std_map.entry(key.clone()).or_default() += amount;
                *ours.get_or_insert_default(key) += amount;
            }
        }
    }

    assert_eq!(ours.len(), std_map.len());
    for (key, value) in &std_map {
        assert_eq!(ours.get(key.as_str()), Some(value));
    }
    for (key, value) in ours.iter() {
        assert_eq!(std_map.get(key), Some(value));
    }
}

#[test]
fn test_heap_matches_binary_heap() {
    let mut rng = StdRng::seed_from_u64(SEED + 2);
    let mut ours = MinHeap::new();
    let mut std_heap = BinaryHeap::new();

    for _ in 0..OPERATIONS {
        if rng.gen_bool(0.6) {
            let value = rng.gen_range(-1000..1000i32);
            ours.push(value);
            std_heap.push(Reverse(value));
        } else {
            assert_eq!(ours.pop().ok(), std_heap.pop().map(|Reverse(v)| v));
        }
        assert_eq!(ours.peek().ok(), std_heap.peek().map(|Reverse(v)| v));
    }
    assert!(ours.check_invariants());
    assert_eq!(ours.len(), std_heap.len());
}

#[test]
fn test_queue_matches_vec_deque() {
    let mut rng = StdRng::seed_from_u64(SEED + 3);
    let mut ours = Queue::new();
    let mut std_queue = VecDeque::new();

    for i in 0..OPERATIONS {
        if rng.gen_bool(0.55) {
            ours.enqueue(i);
            std_queue.push_back(i);
        } else {
            assert_eq!(ours.dequeue(), std_queue.pop_front());
        }
        assert_eq!(ours.peek_front(), std_queue.front());
        assert!(ours.capacity() > ours.len());
    }
    assert!(ours.iter().eq(std_queue.iter()));
}

#[test]
fn test_vector_matches_vec() {
    let mut rng = StdRng::seed_from_u64(SEED + 4);
    let mut ours = Vector::new();
    let mut std_vec = Vec::new();

    for i in 0..OPERATIONS {
        if rng.gen_bool(0.5) {
            ours.push_back(i);
            std_vec.push(i);
        } else {
            assert_eq!(ours.pop_back(), std_vec.pop());
        }
        assert!(ours.len() <= ours.capacity());
    }
    assert_eq!(ours.as_slice(), std_vec.as_slice());
}
