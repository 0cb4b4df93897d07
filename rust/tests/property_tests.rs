use primehash::primes::next_prime;
use primehash::{Greater, HashMap, HashSet, HashTable, MinHeap, Vector, LOWER_BOUND};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum HeapOp {
    Push(i32),
    Pop,
}

fn heap_op() -> impl Strategy<Value = HeapOp> {
    prop_oneof![
        3 => any::<i32>().prop_map(HeapOp::Push),
        1 => Just(HeapOp::Pop),
    ]
}

proptest! {
    #[test]
    fn test_heap_invariant_under_any_sequence(ops in prop::collection::vec(heap_op(), 0..300)) {
        let mut heap = MinHeap::new();
        let mut shadow: Vec<i32> = Vec::new();
        for op in ops {
            match op {
                HeapOp::Push(v) => {
                    heap.push(v);
                    shadow.push(v);
                }
                HeapOp::Pop => {
                    let expected = shadow.iter().copied().min();
                    if let Some(min) = expected {
                        let at = shadow.iter().position(|&v| v == min).unwrap();
                        shadow.swap_remove(at);
                    }
                    prop_assert_eq!(heap.pop().ok(), expected);
                }
            }
            prop_assert!(heap.check_invariants());
            prop_assert_eq!(heap.peek().ok().copied(), shadow.iter().copied().min());
        }
    }

    #[test]
    fn test_heapify_sorts_any_input(values in prop::collection::vec(any::<i64>(), 0..200)) {
        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(MinHeap::from_vec(values.clone()).into_sorted_vec(), expected.clone());

        expected.reverse();
        let max_heap = MinHeap::from_vec_with_comparator(values, Greater);
        prop_assert_eq!(max_heap.into_sorted_vec(), expected);
    }

    #[test]
    fn test_insert_unique_rejects_second_insert(keys in prop::collection::vec(0u32..1000, 1..200)) {
        let mut table: HashSet<u32> = HashTable::new(0);
        for &key in &keys {
            table.insert_unique(key);
        }
        let len = table.len();
        for &key in &keys {
            prop_assert!(!table.insert_unique(key));
        }
        prop_assert_eq!(table.len(), len);
        prop_assert!(table.check_unique_keys().is_ok());
    }

    #[test]
    fn test_rehash_preserves_membership(
        keys in prop::collection::hash_set("[a-z]{1,12}", 0..150),
        hint in 0usize..5000,
    ) {
        let mut map: HashMap<String, usize> = HashMap::new();
        for (i, key) in keys.iter().enumerate() {
            map.insert(key.clone(), i).unwrap();
        }
        let before = map.bucket_count();
        map.resize(hint);

        prop_assert_eq!(map.bucket_count(), before.max(next_prime(hint)));
        prop_assert_eq!(map.len(), keys.len());
        for key in &keys {
            prop_assert!(map.has_key(key.as_str()));
        }
    }

    #[test]
    fn test_erase_removes_every_equal_value(copies in 1usize..20, others in 0u32..50) {
        let mut table: HashSet<u32> = HashTable::new(0);
        for _ in 0..copies {
            table.insert_equal(1_000);
        }
        for v in 0..others {
            table.insert_equal(v);
        }
        prop_assert_eq!(table.erase(&1_000), copies);
        prop_assert!(!table.has_key(&1_000));
        prop_assert_eq!(table.len(), others as usize);
        prop_assert!(table.check_invariants());
    }

    #[test]
    fn test_vector_capacity_tracks_length(pushes in 0usize..500, pops in 0usize..500) {
        let mut v = Vector::new();
        for i in 0..pushes {
            v.push_back(i);
            prop_assert!(v.len() <= v.capacity());
        }
        for _ in 0..pops {
            let removed = v.pop_back().is_some();
            prop_assert!(v.len() <= v.capacity());
            if removed && v.capacity() >= LOWER_BOUND {
                prop_assert!(v.len() >= v.capacity() / 4);
            }
        }
        prop_assert_eq!(v.len(), pushes.saturating_sub(pops));
    }
}
