//! Process-wide link/cut counters for amortized-cost auditing.
//!
//! Every tree-link performed by consolidation and every cut performed by the
//! decrease-key/delete machinery bumps one of two counters shared by all heap
//! instances in the process, including the private auxiliary heaps built by
//! [`k_min`](crate::k_min). They start at zero when the process starts and
//! are never reset; readers that want per-phase numbers take before/after
//! deltas.
//!
//! The counters are relaxed atomics: heaps themselves are single-threaded,
//! but distinct heaps on distinct threads may tally concurrently and the
//! totals must not tear.

use std::sync::atomic::{AtomicU64, Ordering};

static TOTAL_LINKS: AtomicU64 = AtomicU64::new(0);
static TOTAL_CUTS: AtomicU64 = AtomicU64::new(0);

/// Cumulative count of tree-link operations performed by all heaps in this
/// process.
#[inline]
pub fn total_links() -> u64 {
    TOTAL_LINKS.load(Ordering::Relaxed)
}

/// Cumulative count of cut operations performed by all heaps in this process.
#[inline]
pub fn total_cuts() -> u64 {
    TOTAL_CUTS.load(Ordering::Relaxed)
}

#[inline]
pub(crate) fn record_link() {
    TOTAL_LINKS.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub(crate) fn record_cut() {
    TOTAL_CUTS.fetch_add(1, Ordering::Relaxed);
}
