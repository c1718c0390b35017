//! Property-based model tests for the containers.
//!
//! Each container is driven with a `proptest`-generated operation sequence
//! and compared step by step against its standard-library counterpart.
#![allow(clippy::expect_used)]

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use mazegraph_core::{
    ArrayHeap, ChainedHashDictionary, ChainedHashSet, CollectionError, Dictionary,
    DoubleLinkedList, top_k,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum MapOp {
    Put(u8, i32),
    Remove(u8),
    Get(u8),
}

fn arb_map_op() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        3 => (any::<u8>(), any::<i32>()).prop_map(|(k, v)| MapOp::Put(k, v)),
        1 => any::<u8>().prop_map(MapOp::Remove),
        1 => any::<u8>().prop_map(MapOp::Get),
    ]
}

#[derive(Debug, Clone)]
enum HeapOp {
    Insert(i32),
    RemoveMin,
}

fn arb_heap_op() -> impl Strategy<Value = HeapOp> {
    prop_oneof![
        3 => (-1000i32..1000).prop_map(HeapOp::Insert),
        2 => Just(HeapOp::RemoveMin),
    ]
}

#[derive(Debug, Clone)]
enum SeqOp {
    Add(i16),
    PushFront(i16),
    Remove,
    Insert(usize, i16),
    Delete(usize),
    Set(usize, i16),
}

fn arb_seq_op() -> impl Strategy<Value = SeqOp> {
    prop_oneof![
        any::<i16>().prop_map(SeqOp::Add),
        any::<i16>().prop_map(SeqOp::PushFront),
        Just(SeqOp::Remove),
        (0usize..40, any::<i16>()).prop_map(|(i, v)| SeqOp::Insert(i, v)),
        (0usize..40).prop_map(SeqOp::Delete),
        (0usize..40, any::<i16>()).prop_map(|(i, v)| SeqOp::Set(i, v)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Draining the heap yields its input in ascending order.
    #[test]
    fn heap_drains_sorted(items in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut heap = ArrayHeap::with_capacity(1);
        for &item in &items {
            heap.insert(item);
        }
        prop_assert_eq!(heap.len(), items.len());

        let mut drained = Vec::with_capacity(items.len());
        while let Ok(item) = heap.remove_min() {
            drained.push(item);
        }
        let mut expected = items;
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
        prop_assert_eq!(heap.remove_min(), Err(CollectionError::EmptyContainer));
    }

    /// Under any interleaving of `insert` and `remove_min`, every removal
    /// returns the current minimum, so removals between two inserts never
    /// decrease.
    #[test]
    fn heap_interleaved_matches_binary_heap(ops in prop::collection::vec(arb_heap_op(), 0..400)) {
        let mut heap = ArrayHeap::with_capacity(1);
        let mut model = BinaryHeap::new();
        let mut last_removed: Option<i32> = None;
        for op in ops {
            match op {
                HeapOp::Insert(item) => {
                    heap.insert(item);
                    model.push(Reverse(item));
                    last_removed = None;
                }
                HeapOp::RemoveMin => {
                    let expected = model
                        .pop()
                        .map(|Reverse(item)| item)
                        .ok_or(CollectionError::EmptyContainer);
                    let removed = heap.remove_min();
                    prop_assert_eq!(&removed, &expected);
                    if let Ok(item) = removed {
                        if let Some(previous) = last_removed {
                            prop_assert!(previous <= item);
                        }
                        last_removed = Some(item);
                    }
                }
            }
            prop_assert_eq!(heap.len(), model.len());
            let expected_peek = model.peek().map(|Reverse(item)| item);
            prop_assert_eq!(heap.peek_min().ok(), expected_peek);
        }
    }

    /// The chained dictionary agrees with `HashMap` after every operation.
    #[test]
    fn dictionary_matches_hash_map(ops in prop::collection::vec(arb_map_op(), 0..400)) {
        let mut dict = ChainedHashDictionary::with_bucket_count(1);
        let mut model = HashMap::new();
        for op in ops {
            match op {
                MapOp::Put(k, v) => {
                    prop_assert_eq!(dict.put(k, v), model.insert(k, v));
                }
                MapOp::Remove(k) => {
                    let expected = model.remove(&k).ok_or(CollectionError::ItemNotFound);
                    prop_assert_eq!(dict.remove(&k), expected);
                }
                MapOp::Get(k) => {
                    let expected = model.get(&k).ok_or(CollectionError::ItemNotFound);
                    prop_assert_eq!(dict.get(&k), expected);
                }
            }
            prop_assert_eq!(dict.len(), model.len());
            prop_assert!(dict.len() * 3 <= dict.bucket_count() * 2);
        }
        let entries: HashMap<u8, i32> = dict.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(entries, model);
    }

    /// The hash set agrees with `HashSet`.
    #[test]
    fn set_matches_hash_set(items in prop::collection::vec(0u16..64, 0..200)) {
        let mut set = ChainedHashSet::new();
        let mut model = HashSet::new();
        for (step, item) in items.into_iter().enumerate() {
            if step % 3 == 2 {
                let expected = if model.remove(&item) {
                    Ok(())
                } else {
                    Err(CollectionError::ItemNotFound)
                };
                prop_assert_eq!(set.remove(&item), expected);
            } else {
                prop_assert_eq!(set.add(item), model.insert(item));
            }
            prop_assert_eq!(set.len(), model.len());
        }
        let contents: HashSet<u16> = set.iter().copied().collect();
        prop_assert_eq!(contents, model);
    }

    /// The linked list agrees with `Vec` under mixed positional edits.
    #[test]
    fn sequence_matches_vec(ops in prop::collection::vec(arb_seq_op(), 0..200)) {
        let mut list = DoubleLinkedList::new();
        let mut model: Vec<i16> = Vec::new();
        for op in ops {
            match op {
                SeqOp::Add(v) => {
                    list.add(v);
                    model.push(v);
                }
                SeqOp::PushFront(v) => {
                    list.push_front(v);
                    model.insert(0, v);
                }
                SeqOp::Remove => {
                    let expected = model.pop().ok_or(CollectionError::EmptyContainer);
                    prop_assert_eq!(list.remove(), expected);
                }
                SeqOp::Insert(index, v) => {
                    let result = list.insert(index, v);
                    if index <= model.len() {
                        prop_assert!(result.is_ok());
                        model.insert(index, v);
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                SeqOp::Delete(index) => {
                    let result = list.delete(index);
                    if index < model.len() {
                        prop_assert_eq!(result, Ok(model.remove(index)));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                SeqOp::Set(index, v) => {
                    let result = list.set(index, v);
                    if let Some(slot) = model.get_mut(index) {
                        prop_assert_eq!(result, Ok(std::mem::replace(slot, v)));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
            }
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.front(), model.first());
            prop_assert_eq!(list.back(), model.last());
        }
        let contents: Vec<i16> = list.iter().copied().collect();
        prop_assert_eq!(contents, model);
    }

    /// `top_k` returns the largest `k` items, ascending, with duplicates.
    #[test]
    fn top_k_matches_sorted_suffix(
        items in prop::collection::vec(-50i32..50, 0..120),
        k in 0usize..140,
    ) {
        let result: Vec<i32> = top_k(k, &items).into_iter().collect();

        let mut sorted = items.clone();
        sorted.sort_unstable();
        let take = k.min(sorted.len());
        let expected = sorted.split_off(sorted.len() - take);
        prop_assert_eq!(result, expected);
    }
}

#[test]
fn top_k_on_sample_input() {
    let input = [5, 1, 9, 3, 7, 2];
    let top: Vec<i32> = top_k(3, &input).into_iter().collect();
    assert_eq!(top, vec![5, 7, 9]);

    let all: Vec<i32> = top_k(10, &input).into_iter().collect();
    assert_eq!(all, vec![1, 2, 3, 5, 7, 9]);

    assert!(top_k(0, &input).is_empty());
}
