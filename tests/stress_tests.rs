//! Stress tests that push the heap through large workloads
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use fibheap::{FibonacciHeap, Key};

#[test]
fn massive_insert_then_drain() {
    let mut heap = FibonacciHeap::new();
    for i in 0..1000 {
        heap.insert(i);
    }
    assert_eq!(heap.len(), 1000);

    for i in 0..1000 {
        assert_eq!(heap.delete_min(), Some(i));
    }
    assert!(heap.is_empty());
}

#[test]
fn many_decrease_keys_reorder_completely() {
    let mut heap = FibonacciHeap::new();
    let mut handles = Vec::new();

    // Insert in one order, then decrease every key into a new total order.
    for i in 0..500 {
        handles.push(heap.insert(10_000 + i));
    }
    for (i, &handle) in handles.iter().enumerate() {
        // 10_000 + i drops to i - 500.
        heap.decrease_key(handle, 10_500).unwrap();
        assert_eq!(heap.key(handle), Some(i as Key - 500));
    }

    for i in 0..500 {
        assert_eq!(heap.delete_min(), Some(i - 500));
    }
    assert!(heap.is_empty());
}

#[test]
fn alternating_insert_and_delete_min() {
    let mut heap = FibonacciHeap::new();
    for i in 0..200 {
        heap.insert(i * 2);
        heap.insert(i * 2 + 1);
        assert!(heap.delete_min().is_some());
    }
    assert_eq!(heap.len(), 200);

    let mut last = Key::MIN;
    while let Some(key) = heap.delete_min() {
        assert!(key >= last);
        last = key;
    }
    assert!(heap.is_empty());
}

#[test]
fn large_meld_interleaves_cleanly() {
    let mut heap1 = FibonacciHeap::new();
    let mut heap2 = FibonacciHeap::new();
    for i in 0..500 {
        heap1.insert(i * 2);
        heap2.insert(i * 2 + 1);
    }

    heap1.meld(heap2);
    assert_eq!(heap1.len(), 1000);

    // The union is exactly 0..1000.
    for i in 0..1000 {
        assert_eq!(heap1.delete_min(), Some(i));
    }
}

#[test]
fn meld_tournament_collects_every_key() {
    // Eight heaps of fifty keys each, melded pairwise down to one.
    let mut heaps: Vec<FibonacciHeap> = (0..8)
        .map(|h| {
            let mut heap = FibonacciHeap::new();
            for i in 0..50 {
                heap.insert(i * 8 + h);
            }
            heap.delete_min();
            heap
        })
        .collect();

    while heaps.len() > 1 {
        let mut next = Vec::new();
        while let (Some(mut a), b) = (heaps.pop(), heaps.pop()) {
            if let Some(b) = b {
                a.meld(b);
            }
            next.push(a);
        }
        heaps = next;
    }

    let mut heap = heaps.pop().unwrap();
    assert_eq!(heap.len(), 8 * 49);

    let mut drained = Vec::new();
    while let Some(key) = heap.delete_min() {
        drained.push(key);
    }
    // Every heap lost its own minimum (keys 0..8) to the warm-up delete.
    let mut expected: Vec<Key> = (8..400).collect();
    expected.sort_unstable();
    assert_eq!(drained, expected);
}

#[test]
fn random_churn_agrees_with_binary_heap() {
    let mut rng = rand::thread_rng();
    let key_dist = Uniform::new_inclusive(-1_000, 1_000);

    let mut heap = FibonacciHeap::new();
    let mut model: BinaryHeap<Reverse<Key>> = BinaryHeap::new();

    for _ in 0..5_000 {
        if model.is_empty() || rng.gen_bool(0.6) {
            let key = key_dist.sample(&mut rng);
            heap.insert(key);
            model.push(Reverse(key));
        } else {
            let expected = model.pop().map(|Reverse(k)| k);
            assert_eq!(heap.delete_min(), expected);
        }
        assert_eq!(heap.len(), model.len());
        assert_eq!(heap.peek(), model.peek().map(|&Reverse(k)| k));
    }

    while let Some(Reverse(expected)) = model.pop() {
        assert_eq!(heap.delete_min(), Some(expected));
    }
    assert!(heap.is_empty());
}

#[test]
fn random_decrease_storm_keeps_order() {
    let mut rng = rand::thread_rng();
    let delta_dist = Uniform::new_inclusive(0, 5_000);

    let mut heap = FibonacciHeap::new();
    let mut entries = Vec::new();
    for i in 0..2_000 {
        entries.push((heap.insert(i), i));
    }
    heap.delete_min();
    entries.remove(0);

    // Random decreases through live handles, model updated in lock step.
    for _ in 0..3_000 {
        let i = rng.gen_range(0..entries.len());
        let delta = delta_dist.sample(&mut rng);
        heap.decrease_key(entries[i].0, delta).unwrap();
        entries[i].1 = entries[i].1.saturating_sub(delta);
        assert_eq!(heap.key(entries[i].0), Some(entries[i].1));
    }

    let mut expected: Vec<Key> = entries.iter().map(|&(_, k)| k).collect();
    expected.sort_unstable();
    let mut drained = Vec::new();
    while let Some(key) = heap.delete_min() {
        drained.push(key);
    }
    assert_eq!(drained, expected);
}
