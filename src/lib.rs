//! Mergeable Fibonacci heap over integer keys.
//!
//! A min-oriented priority queue built as a ring of heap-ordered trees, with
//! the classic amortized bounds:
//!
//! - `insert`, `peek`, `find_min`, `meld` splice: O(1) worst case
//! - `decrease_key`: O(1) amortized
//! - `delete_min`, `delete`: O(log n) amortized
//! - `k_min`: `k` smallest keys of a single-tree heap in O(k * d) for
//!   maximum degree `d`, without mutating the source
//!
//! Every node lives in a per-heap [`slotmap`] arena and is addressed through
//! the generational [`NodeKey`] handle returned by
//! [`insert`](FibonacciHeap::insert), so stale handles are detected instead
//! of dereferencing freed memory. Operations that can fail return
//! [`HeapError`] and leave the heap unchanged.
//!
//! Tree links and subtree cuts are tallied process-wide ([`total_links`],
//! [`total_cuts`]) so the amortized analysis can be audited against observed
//! work; see [`stats`] for how to read them.
//!
//! # Example
//!
//! ```rust
//! use fibheap::FibonacciHeap;
//!
//! let mut heap = FibonacciHeap::new();
//! let mut other = FibonacciHeap::new();
//! let slow = heap.insert(40);
//! heap.insert(10);
//! other.insert(25);
//! heap.meld(other);
//!
//! heap.decrease_key(slow, 35).unwrap(); // 40 -> 5
//! assert_eq!(heap.delete_min(), Some(5));
//! assert_eq!(heap.delete_min(), Some(10));
//! assert_eq!(heap.delete_min(), Some(25));
//! assert!(heap.is_empty());
//! ```

mod node;
mod rank;
mod ring;

pub mod error;
pub mod fibonacci;
pub mod select;
pub mod stats;

pub use error::HeapError;
pub use fibonacci::FibonacciHeap;
pub use node::{Key, NodeKey};
pub use select::k_min;
pub use stats::{total_cuts, total_links};
