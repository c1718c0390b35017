//! Bounded-heap selection of the `k` largest items.
use crate::config::ContainerConfig;
use crate::priority_queue::ArrayHeap;
use crate::sequence::DoubleLinkedList;

/// Returns the `k` largest items of `input`, smallest first.
///
/// The first `k` items go straight into a min-heap. Every later item replaces
/// the heap minimum only when it is strictly greater, so among equal items
/// the earlier ones are kept. Draining the heap yields ascending order; with
/// `k >= input length` the result is a full ascending sort.
///
/// `input` is only read. A `k` of zero returns an empty list.
pub fn top_k<'a, T, I>(k: usize, input: I) -> DoubleLinkedList<T>
where
    T: Ord + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    top_k_with_config(k, input, &ContainerConfig::default())
}

/// [`top_k`] with the heap sized from `config`.
pub fn top_k_with_config<'a, T, I>(
    k: usize,
    input: I,
    config: &ContainerConfig,
) -> DoubleLinkedList<T>
where
    T: Ord + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut result = DoubleLinkedList::new();
    if k == 0 {
        return result;
    }

    let mut heap = ArrayHeap::with_capacity(config.initial_heap_capacity.min(k));
    for item in input {
        if heap.len() < k {
            heap.insert(item.clone());
        } else if heap.peek_min().is_ok_and(|min| item > min) {
            // The heap is full, so `remove_min` cannot fail here.
            if heap.remove_min().is_ok() {
                heap.insert(item.clone());
            }
        }
    }

    while let Ok(item) = heap.remove_min() {
        result.add(item);
    }
    result
}
