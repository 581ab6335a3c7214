//! Circular doubly-linked ring primitives over the node arena.
//!
//! Both the root list and every child list are rings threaded through the
//! `next`/`prev` fields of [`Node`]. A singleton ring points back at itself,
//! so there is no empty-ring representation and every edit is a fixed number
//! of index rewrites. Nothing in this module looks at keys.

use slotmap::{Key as _, SlotMap};

use crate::node::{Node, NodeKey};

type Arena = SlotMap<NodeKey, Node>;

/// Reset `n` to its own one-node ring.
///
/// Used on a node whose ring membership has just been dissolved (a link loser
/// leaving a defunct root ring, or a consolidated root about to seed the
/// rebuilt one).
#[inline]
pub(crate) fn make_singleton(nodes: &mut Arena, n: NodeKey) {
    nodes[n].next = n;
    nodes[n].prev = n;
}

/// Splice the ring headed by `b` immediately after `a`: four pointer writes.
///
/// `b` may be a singleton or a whole sub-ring; either way every node of `b`'s
/// ring ends up between `a` and `a`'s old successor, in `b`'s ring order.
/// The two rings must be disjoint.
pub(crate) fn splice_after(nodes: &mut Arena, a: NodeKey, b: NodeKey) {
    let a_next = nodes[a].next;
    let b_prev = nodes[b].prev;
    nodes[a].next = b;
    nodes[b].prev = a;
    nodes[b_prev].next = a_next;
    nodes[a_next].prev = b_prev;
}

/// Remove `n` from its ring, re-linking its neighbors around it. `n` itself
/// is left as a singleton ring. A no-op (modulo self-writes) if `n` already
/// is one.
pub(crate) fn bypass(nodes: &mut Arena, n: NodeKey) {
    let next = nodes[n].next;
    let prev = nodes[n].prev;
    nodes[prev].next = next;
    nodes[next].prev = prev;
    nodes[n].next = n;
    nodes[n].prev = n;
}

/// Walk one full cycle of the ring containing `start`, yielding each node
/// once, starting at `start`.
///
/// Read-only: callers that mutate the ring mid-walk must collect first.
pub(crate) fn iter(nodes: &Arena, start: NodeKey) -> RingIter<'_> {
    debug_assert!(!start.is_null());
    RingIter {
        nodes,
        start,
        cur: start,
        done: false,
    }
}

pub(crate) struct RingIter<'a> {
    nodes: &'a Arena,
    start: NodeKey,
    cur: NodeKey,
    done: bool,
}

impl Iterator for RingIter<'_> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<NodeKey> {
        if self.done {
            return None;
        }
        let item = self.cur;
        self.cur = self.nodes[item].next;
        if self.cur == self.start {
            self.done = true;
        }
        Some(item)
    }
}
