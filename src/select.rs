//! K-smallest extraction without mutating the source heap.
//!
//! Runs a best-first search over one heap-ordered tree: a private auxiliary
//! [`FibonacciHeap`] holds the frontier, and each frontier node carries a
//! back-reference to the source node it mirrors. Popping the frontier minimum
//! yields the next output key and admits that node's children. After `k` pops
//! the frontier has seen O(k * d) nodes for maximum degree `d`, so the whole
//! extraction is O(k * d) amortized heap work.

use slotmap::Key as _;

use crate::error::HeapError;
use crate::fibonacci::FibonacciHeap;
use crate::node::Key;
use crate::ring;

/// Returns the `k` smallest keys of `heap` in ascending order.
///
/// The source heap must consist of exactly one tree (the state every
/// [`delete_min`](FibonacciHeap::delete_min) leaves behind); a multi-tree
/// root ring has no single entry point for the downward search. If `k`
/// exceeds the heap size, every key is returned.
///
/// The heap is borrowed shared and never changes; all bookkeeping happens in
/// an internal scratch heap.
///
/// # Errors
///
/// [`HeapError::NotSingleTree`] if the root ring holds zero or more than one
/// tree.
///
/// # Example
///
/// ```rust
/// use fibheap::{k_min, FibonacciHeap};
///
/// let mut heap = FibonacciHeap::new();
/// for key in 0..=4 {
///     heap.insert(key);
/// }
/// heap.delete_min(); // consolidates the survivors into a single tree
/// assert_eq!(k_min(&heap, 2).unwrap(), vec![1, 2]);
/// ```
pub fn k_min(heap: &FibonacciHeap, k: usize) -> Result<Vec<Key>, HeapError> {
    if heap.number_of_trees() != 1 {
        return Err(HeapError::NotSingleTree);
    }
    let k = k.min(heap.len());
    let mut out = Vec::with_capacity(k);
    if k == 0 {
        return Ok(out);
    }

    let mut frontier = FibonacciHeap::new();
    let root = heap.first;
    frontier.insert_matched(heap.nodes[root].key, root);

    while out.len() < k {
        let Some(top) = frontier.find_min() else {
            break;
        };
        // Read through the frontier node before delete_min retires it.
        let key = frontier.nodes[top].key;
        let source = frontier.nodes[top].matching;
        out.push(key);

        let child = heap.nodes[source].child;
        if !child.is_null() {
            for c in ring::iter(&heap.nodes, child) {
                frontier.insert_matched(heap.nodes[c].key, c);
            }
        }
        frontier.delete_min();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One tree holding exactly the keys `1..=n` for a power of two `n`:
    /// insert `0..=n`, then let delete-min consolidate the survivors.
    fn single_tree_heap(n: Key) -> FibonacciHeap {
        assert!((n as u64).is_power_of_two());
        let mut heap = FibonacciHeap::new();
        for key in 0..=n {
            heap.insert(key);
        }
        assert_eq!(heap.delete_min(), Some(0));
        assert_eq!(heap.number_of_trees(), 1);
        heap
    }

    #[test]
    fn test_k_min_returns_sorted_prefix() {
        let heap = single_tree_heap(16);
        assert_eq!(k_min(&heap, 1).unwrap(), vec![1]);
        assert_eq!(k_min(&heap, 5).unwrap(), vec![1, 2, 3, 4, 5]);
        assert_eq!(k_min(&heap, 16).unwrap(), (1..=16).collect::<Vec<_>>());
    }

    #[test]
    fn test_k_min_caps_at_heap_size() {
        let heap = single_tree_heap(4);
        assert_eq!(k_min(&heap, 100).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_k_min_zero_is_empty() {
        let heap = single_tree_heap(4);
        assert_eq!(k_min(&heap, 0).unwrap(), Vec::<Key>::new());
    }

    #[test]
    fn test_k_min_rejects_empty_heap() {
        // Zero trees is as much a precondition violation as two.
        let heap = FibonacciHeap::new();
        assert_eq!(k_min(&heap, 3), Err(HeapError::NotSingleTree));
    }

    #[test]
    fn test_k_min_rejects_multiple_trees() {
        let mut heap = FibonacciHeap::new();
        heap.insert(1);
        heap.insert(2);
        assert_eq!(k_min(&heap, 1), Err(HeapError::NotSingleTree));
    }

    #[test]
    fn test_k_min_single_node_heap() {
        let mut heap = FibonacciHeap::new();
        heap.insert(42);
        assert_eq!(k_min(&heap, 3).unwrap(), vec![42]);
    }

    #[test]
    fn test_k_min_leaves_source_untouched() {
        let heap = single_tree_heap(8);
        let before_len = heap.len();
        let before_trees = heap.number_of_trees();
        let first = k_min(&heap, 6).unwrap();
        let second = k_min(&heap, 6).unwrap();
        assert_eq!(first, second);
        assert_eq!(heap.len(), before_len);
        assert_eq!(heap.number_of_trees(), before_trees);
        heap.check_invariants();
    }

    #[test]
    fn test_k_min_with_duplicate_keys() {
        // Drive two distinct nodes to the same key, then rebuild one tree.
        let mut heap = FibonacciHeap::new();
        let mut handles = Vec::new();
        for key in 0..=8 {
            handles.push(heap.insert(key));
        }
        heap.decrease_key(handles[7], 4).unwrap(); // 7 -> 3, duplicate of 3
        assert_eq!(heap.delete_min(), Some(0));
        assert_eq!(heap.number_of_trees(), 1);

        let keys = k_min(&heap, 4).unwrap();
        assert_eq!(keys, vec![1, 2, 3, 3]);
    }
}
