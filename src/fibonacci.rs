//! Fibonacci heap over integer keys.
//!
//! A mergeable priority queue with:
//! - O(1) worst-case insert and find-min
//! - O(1) amortized decrease-key
//! - O(log n) amortized delete-min (lazy consolidation)
//!
//! The structure is a ring of heap-ordered trees. Roots sit in a circular
//! doubly-linked list entered through a designated `first` root; every node's
//! children form such a ring too. All nodes live in a per-heap slotmap arena
//! and reference each other by key, so there is no pointer surgery and no
//! custom `Drop`. Tree links and subtree cuts are tallied process-wide for
//! amortized-cost auditing (see [`crate::stats`]).

use rustc_hash::FxHashMap;
use slotmap::{Key as _, SlotMap};
use smallvec::SmallVec;

use crate::error::HeapError;
use crate::node::{Key, Node, NodeKey};
use crate::rank;
use crate::ring;
use crate::stats;

/// Fibonacci heap of integer keys.
///
/// Handles returned by [`insert`](FibonacciHeap::insert) stay valid until the
/// node is removed and are the way to address nodes in
/// [`decrease_key`](FibonacciHeap::decrease_key) and
/// [`delete`](FibonacciHeap::delete).
///
/// # Example
///
/// ```rust
/// use fibheap::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// let handle = heap.insert(5);
/// heap.insert(3);
/// heap.decrease_key(handle, 4).unwrap(); // 5 - 4 = 1
/// assert_eq!(heap.peek(), Some(1));
/// assert_eq!(heap.delete_min(), Some(1));
/// assert_eq!(heap.delete_min(), Some(3));
/// assert!(heap.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct FibonacciHeap {
    pub(crate) nodes: SlotMap<NodeKey, Node>,
    /// Root with the smallest key; null iff the heap is empty.
    pub(crate) min: NodeKey,
    /// Designated entry point into the root ring; null iff empty.
    pub(crate) first: NodeKey,
    pub(crate) size: usize,
    /// Count of unmarked nodes, maintained incrementally for `potential`.
    pub(crate) non_marked: usize,
}

impl FibonacciHeap {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff the heap holds no nodes. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first.is_null()
    }

    /// Number of keys currently stored. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Inserts `key` and returns the handle of its node. O(1) worst case.
    ///
    /// The new node joins the root ring as the new `first` root.
    pub fn insert(&mut self, key: Key) -> NodeKey {
        let node = self.nodes.insert_with_key(|slot| Node::singleton(key, slot));
        self.push_root(node);
        self.size += 1;
        self.non_marked += 1;
        node
    }

    /// Handle of the node holding the smallest key, or `None` if empty. O(1).
    pub fn find_min(&self) -> Option<NodeKey> {
        if self.min.is_null() {
            None
        } else {
            Some(self.min)
        }
    }

    /// The smallest key without removing it, or `None` if empty. O(1).
    pub fn peek(&self) -> Option<Key> {
        self.nodes.get(self.min).map(|n| n.key)
    }

    /// Current key of the node behind `node`, or `None` if the handle is
    /// stale. O(1).
    pub fn key(&self, node: NodeKey) -> Option<Key> {
        self.nodes.get(node).map(|n| n.key)
    }

    /// Removes the minimum node and returns its key, or `None` if the heap is
    /// empty. Amortized O(log n).
    ///
    /// Children of the removed minimum are promoted into the root ring in its
    /// place (promoted roots are unmarked), then the root ring is consolidated
    /// so no two roots share a rank; consolidation recomputes `min` and
    /// `first`.
    pub fn delete_min(&mut self) -> Option<Key> {
        if self.min.is_null() {
            return None;
        }
        let min = self.min;

        let child = self.nodes[min].child;
        if !child.is_null() {
            let children: SmallVec<[NodeKey; 16]> = ring::iter(&self.nodes, child).collect();
            for &c in &children {
                let n = &mut self.nodes[c];
                n.parent = NodeKey::null();
                if n.marked {
                    n.marked = false;
                    self.non_marked += 1;
                }
            }
            ring::splice_after(&mut self.nodes, min, child);
        }

        let succ = self.nodes[min].next;
        ring::bypass(&mut self.nodes, min);
        let removed = self.nodes.remove(min)?;
        self.size -= 1;
        // The removed node was a root, hence unmarked.
        self.non_marked -= 1;

        if self.size == 0 {
            self.min = NodeKey::null();
            self.first = NodeKey::null();
        } else if self.size == 1 {
            self.min = succ;
            self.first = succ;
        } else {
            self.consolidate(succ);
        }
        Some(removed.key)
    }

    /// Reduces the key of `node` by `delta` (`delta >= 0`). Amortized O(1).
    ///
    /// The new key saturates at [`Key::MIN`] rather than wrapping. If the new
    /// key undercuts the parent's, the node is cut to the root ring and the
    /// cut cascades up through marked ancestors.
    ///
    /// # Errors
    ///
    /// [`HeapError::NegativeDelta`] if `delta < 0`, [`HeapError::StaleHandle`]
    /// if the node is no longer in this heap. The heap is unchanged in both
    /// cases.
    pub fn decrease_key(&mut self, node: NodeKey, delta: Key) -> Result<(), HeapError> {
        if delta < 0 {
            return Err(HeapError::NegativeDelta);
        }
        if !self.nodes.contains_key(node) {
            return Err(HeapError::StaleHandle);
        }

        let new_key = self.nodes[node].key.saturating_sub(delta);
        self.nodes[node].key = new_key;

        let parent = self.nodes[node].parent;
        if parent.is_null() {
            // A root cannot break heap order; at most the minimum moved.
            if new_key < self.nodes[self.min].key {
                self.min = node;
            }
            return Ok(());
        }
        if new_key >= self.nodes[parent].key {
            return Ok(());
        }
        self.cascading_cut(node, parent);
        Ok(())
    }

    /// Removes `node` from the heap. Amortized O(log n).
    ///
    /// The node is forced into the minimum position through the same cut path
    /// `decrease_key` uses (its key is not altered, so arbitrarily distant
    /// keys cannot overflow), then removed by [`delete_min`](Self::delete_min).
    ///
    /// # Errors
    ///
    /// [`HeapError::StaleHandle`] if the node is no longer in this heap.
    pub fn delete(&mut self, node: NodeKey) -> Result<(), HeapError> {
        if !self.nodes.contains_key(node) {
            return Err(HeapError::StaleHandle);
        }
        let parent = self.nodes[node].parent;
        if !parent.is_null() {
            self.cascading_cut(node, parent);
        }
        self.min = node;
        self.delete_min();
        Ok(())
    }

    /// Moves every node of `other` into this heap. The donor is consumed;
    /// its handles must not be used with the receiver.
    ///
    /// The donor's root ring is appended after this heap's last root, the
    /// smaller of the two minimums wins, and `size`/non-marked counts are
    /// summed. The ring splice is O(1); rehoming the donor's nodes into this
    /// arena is O(len(other)).
    ///
    /// # Example
    ///
    /// ```rust
    /// use fibheap::FibonacciHeap;
    ///
    /// let mut a = FibonacciHeap::new();
    /// a.insert(5);
    /// let mut b = FibonacciHeap::new();
    /// b.insert(3);
    /// a.meld(b);
    /// assert_eq!(a.len(), 2);
    /// assert_eq!(a.peek(), Some(3));
    /// ```
    pub fn meld(&mut self, mut other: Self) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = other;
            return;
        }

        // Rehome the donor's nodes under fresh keys, then rewrite the link
        // fields through the remap. `matching` is deliberately left alone: it
        // points into a foreign arena and only k-smallest extraction reads it.
        let mut remap: FxHashMap<NodeKey, NodeKey> = FxHashMap::default();
        remap.reserve(other.nodes.len());
        for (old, node) in other.nodes.drain() {
            remap.insert(old, self.nodes.insert(node));
        }
        for &new in remap.values() {
            let next = self.nodes[new].next;
            self.nodes[new].next = remap[&next];
            let prev = self.nodes[new].prev;
            self.nodes[new].prev = remap[&prev];
            let parent = self.nodes[new].parent;
            if !parent.is_null() {
                self.nodes[new].parent = remap[&parent];
            }
            let child = self.nodes[new].child;
            if !child.is_null() {
                self.nodes[new].child = remap[&child];
            }
        }

        let other_first = remap[&other.first];
        let other_min = remap[&other.min];
        let last = self.nodes[self.first].prev;
        ring::splice_after(&mut self.nodes, last, other_first);
        if self.nodes[other_min].key < self.nodes[self.min].key {
            self.min = other_min;
        }
        self.size += other.size;
        self.non_marked += other.non_marked;
    }

    /// Number of trees in the root ring; 0 for an empty heap. O(t).
    pub fn number_of_trees(&self) -> usize {
        if self.first.is_null() {
            0
        } else {
            ring::iter(&self.nodes, self.first).count()
        }
    }

    /// Tree counts bucketed by rank: index `i` holds the number of rank-`i`
    /// roots. No trailing zeros; empty for an empty heap. O(t).
    ///
    /// # Example
    ///
    /// ```rust
    /// use fibheap::FibonacciHeap;
    ///
    /// let mut heap = FibonacciHeap::new();
    /// for key in 0..4 {
    ///     heap.insert(key);
    /// }
    /// assert_eq!(heap.counters_by_rank(), vec![4]);
    /// ```
    pub fn counters_by_rank(&self) -> Vec<usize> {
        let mut counters = Vec::new();
        if self.first.is_null() {
            return counters;
        }
        for root in ring::iter(&self.nodes, self.first) {
            let r = self.nodes[root].rank as usize;
            if counters.len() <= r {
                counters.resize(r + 1, 0);
            }
            counters[r] += 1;
        }
        counters
    }

    /// Count of unmarked nodes. O(1).
    #[inline]
    pub fn non_marked(&self) -> usize {
        self.non_marked
    }

    /// The potential function `trees + 2 * marked`, recomputed from live
    /// state. O(t).
    ///
    /// This is the quantity the amortized bounds are argued against: insert
    /// raises it by 1, each link or mark-clearing cut lowers it, so the
    /// process-wide link/cut totals can be audited versus observed work.
    pub fn potential(&self) -> usize {
        self.number_of_trees() + 2 * (self.size - self.non_marked)
    }

    /// Insert used by k-smallest extraction: the new node carries a
    /// back-reference into the *source* heap's arena.
    pub(crate) fn insert_matched(&mut self, key: Key, matching: NodeKey) -> NodeKey {
        let node = self.insert(key);
        self.nodes[node].matching = matching;
        node
    }

    /// Splices a parentless singleton into the root ring as the new `first`,
    /// updating `min` if its key is now smallest.
    fn push_root(&mut self, node: NodeKey) {
        debug_assert!(self.nodes[node].is_root());
        if self.first.is_null() {
            self.min = node;
            self.first = node;
            return;
        }
        let last = self.nodes[self.first].prev;
        ring::splice_after(&mut self.nodes, last, node);
        self.first = node;
        if self.nodes[node].key < self.nodes[self.min].key {
            self.min = node;
        }
    }

    /// Buckets the root ring by rank, linking same-rank trees until every
    /// rank is distinct, then rebuilds a compact root ring and recomputes
    /// `min`/`first`. O(t + log n) amortized.
    fn consolidate(&mut self, start: NodeKey) {
        // Walk order is fixed before any relinking happens.
        let roots: Vec<NodeKey> = ring::iter(&self.nodes, start).collect();
        let mut buckets: Vec<NodeKey> = vec![NodeKey::null(); rank::bucket_count(self.size)];

        for &root in &roots {
            let mut tree = root;
            loop {
                let r = self.nodes[tree].rank as usize;
                if buckets[r].is_null() {
                    buckets[r] = tree;
                    break;
                }
                let occupant = std::mem::replace(&mut buckets[r], NodeKey::null());
                tree = self.link(tree, occupant);
            }
        }

        self.first = NodeKey::null();
        self.min = NodeKey::null();
        for &root in buckets.iter().filter(|b| !b.is_null()) {
            ring::make_singleton(&mut self.nodes, root);
            if self.first.is_null() {
                self.first = root;
                self.min = root;
            } else {
                let last = self.nodes[self.first].prev;
                ring::splice_after(&mut self.nodes, last, root);
                if self.nodes[root].key < self.nodes[self.min].key {
                    self.min = root;
                }
            }
        }
        // The rebuilt ring is entered at its minimum.
        self.first = self.min;
    }

    /// Links two roots of equal rank: the larger key becomes a child of the
    /// smaller. On exactly equal keys `a` keeps its root. Returns the winner.
    fn link(&mut self, a: NodeKey, b: NodeKey) -> NodeKey {
        let (winner, loser) = if self.nodes[b].key < self.nodes[a].key {
            (b, a)
        } else {
            (a, b)
        };
        debug_assert!(!self.nodes[loser].marked, "roots are never marked");

        // The loser's old ring membership is defunct; reset it before it
        // joins the winner's child ring.
        ring::make_singleton(&mut self.nodes, loser);
        let child = self.nodes[winner].child;
        if child.is_null() {
            self.nodes[winner].child = loser;
        } else {
            // Insert at the child ring's tail, keeping `child` stable.
            let tail = self.nodes[child].prev;
            ring::splice_after(&mut self.nodes, tail, loser);
        }
        self.nodes[loser].parent = winner;
        self.nodes[winner].rank = rank::checked_increment(self.nodes[winner].rank);
        stats::record_link();
        winner
    }

    /// Detaches `node` from `parent`'s child ring, unmarking it if needed.
    /// The node is left as a parentless singleton, not yet in any root ring.
    fn cut(&mut self, node: NodeKey, parent: NodeKey) {
        let next = self.nodes[node].next;
        if next == node {
            // Sole child.
            self.nodes[parent].child = NodeKey::null();
        } else if self.nodes[parent].child == node {
            // Designated child: shift the designation to a sibling.
            self.nodes[parent].child = next;
        }
        ring::bypass(&mut self.nodes, node);
        self.nodes[parent].rank -= 1;

        let n = &mut self.nodes[node];
        n.parent = NodeKey::null();
        if n.marked {
            n.marked = false;
            self.non_marked += 1;
        }
        stats::record_cut();
    }

    /// Cuts `node` from `parent` and promotes it to the root ring as the new
    /// `first`, then walks upward: a root ancestor ends the chain, an
    /// unmarked ancestor is marked (first child lost) and ends it, a marked
    /// ancestor has lost its second child and is cut in turn.
    fn cascading_cut(&mut self, mut node: NodeKey, mut parent: NodeKey) {
        loop {
            self.cut(node, parent);
            self.push_root(node);

            let grandparent = self.nodes[parent].parent;
            if grandparent.is_null() {
                break;
            }
            if !self.nodes[parent].marked {
                self.nodes[parent].marked = true;
                self.non_marked -= 1;
                break;
            }
            node = parent;
            parent = grandparent;
        }
    }

    /// Full-structure traversal asserting every structural invariant. Test
    /// builds only; nothing in the engine relies on it.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        if self.first.is_null() {
            assert!(self.min.is_null(), "empty heap must have no min");
            assert_eq!(self.size, 0);
            assert_eq!(self.non_marked, 0);
            assert_eq!(self.nodes.len(), 0, "empty heap must have an empty arena");
            return;
        }

        let roots: Vec<NodeKey> = ring::iter(&self.nodes, self.first).collect();
        assert!(roots.contains(&self.min), "min must be a root");
        for &r in &roots {
            assert!(self.nodes[r].is_root(), "root ring node has a parent");
            assert!(!self.nodes[r].marked, "roots are never marked");
        }

        let mut seen = 0usize;
        let mut marked = 0usize;
        let mut stack = roots;
        while let Some(n) = stack.pop() {
            seen += 1;
            if self.nodes[n].marked {
                marked += 1;
            }
            // Ring validity around this node.
            assert_eq!(self.nodes[self.nodes[n].next].prev, n);
            assert_eq!(self.nodes[self.nodes[n].prev].next, n);

            let child = self.nodes[n].child;
            let mut child_count = 0usize;
            if !child.is_null() {
                for c in ring::iter(&self.nodes, child) {
                    child_count += 1;
                    assert_eq!(self.nodes[c].parent, n, "child ring parent mismatch");
                    assert!(
                        self.nodes[c].key >= self.nodes[n].key,
                        "heap order violated"
                    );
                    stack.push(c);
                }
            }
            assert_eq!(
                self.nodes[n].rank as usize, child_count,
                "rank must equal child count"
            );
        }

        assert_eq!(seen, self.size, "reachable nodes must equal size");
        assert_eq!(self.nodes.len(), self.size, "arena must hold exactly the live nodes");
        assert_eq!(self.non_marked, self.size - marked);
        let min_key = self.nodes[self.min].key;
        assert!(
            self.nodes.values().all(|n| n.key >= min_key),
            "min must hold the smallest key"
        );
    }
}
