//! Rank (child count) type and the consolidation bucket bound.
//!
//! A Fibonacci tree of rank `r` has at least `F(r+2) >= phi^r` nodes, so rank
//! never exceeds `log_phi(n)`. `u8` therefore covers any heap that fits in
//! memory while keeping the node record compact.

/// Child count of a node. Bounded by `log_phi(n)`, so `u8` has ample headroom.
pub(crate) type Rank = u8;

/// 1 / log2(phi): converts a base-2 logarithm to base phi.
const LOG2_PHI_INV: f64 = 1.4404200904125567;

/// Increment a rank, panicking on overflow.
///
/// Overflow would require a heap of more than 2^177 nodes; reaching it means
/// the rank invariant is broken, not that the heap is large.
#[inline]
pub(crate) fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1)
        .expect("rank overflow: rank is bounded by log_phi(n)")
}

/// Bucket array length for consolidating a heap of `size` nodes:
/// `ceil(log_phi(size))` computed from the integer log, plus one slot so the
/// maximum rank indexes in bounds.
///
/// Only meaningful for `size >= 2`; consolidation is skipped below that.
#[inline]
pub(crate) fn bucket_count(size: usize) -> usize {
    debug_assert!(size >= 2);
    ((size.ilog2() + 1) as f64 * LOG2_PHI_INV).ceil() as usize + 1
}
