//! Node storage for the heap arena.
//!
//! Nodes live in a per-heap [`SlotMap`](slotmap::SlotMap) and refer to each
//! other by [`NodeKey`] instead of by pointer. Link fields use
//! [`NodeKey::null()`](slotmap::Key::null) as the "no node" value, so a node
//! record is plain data and the arena can be dropped, cloned, or moved
//! wholesale without any unsafe cleanup.

use slotmap::{new_key_type, Key as _};

use crate::rank::Rank;

/// Comparison key stored in each node.
pub type Key = i64;

new_key_type! {
    /// Opaque handle to a live heap node.
    ///
    /// Returned by [`FibonacciHeap::insert`](crate::FibonacciHeap::insert) and
    /// accepted by `decrease_key` and `delete`. Keys are generational: once
    /// the node is removed, the handle is detected as stale by the heap that
    /// owned it. Passing a handle to a *different* heap instance is a
    /// precondition violation with an undefined (but memory-safe) result, as
    /// it may alias an unrelated live node there.
    pub struct NodeKey;
}

/// One tree node; a root when `parent` is null.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) key: Key,
    /// Number of direct children.
    pub(crate) rank: Rank,
    /// True iff this non-root node has lost a child since it last became a
    /// child. Roots are never marked.
    pub(crate) marked: bool,
    /// Owning node, or null for a root. Structural only, used by cuts.
    pub(crate) parent: NodeKey,
    /// One arbitrary child, or null; siblings hang off its ring.
    pub(crate) child: NodeKey,
    /// Sibling ring position. A singleton ring points back at itself.
    pub(crate) next: NodeKey,
    pub(crate) prev: NodeKey,
    /// Back-reference into a *source* heap's arena, populated only on the
    /// auxiliary-heap nodes built by [`k_min`](crate::k_min). Never remapped
    /// by meld: auxiliary heaps are private and never melded.
    pub(crate) matching: NodeKey,
}

impl Node {
    /// A fresh singleton: its own one-node ring, no parent, no children.
    /// `slot` must be the key this node is being inserted under.
    pub(crate) fn singleton(key: Key, slot: NodeKey) -> Self {
        Node {
            key,
            rank: 0,
            marked: false,
            parent: NodeKey::null(),
            child: NodeKey::null(),
            next: slot,
            prev: slot,
            matching: NodeKey::null(),
        }
    }

    #[inline]
    pub(crate) fn is_root(&self) -> bool {
        self.parent.is_null()
    }
}
