//! Lock-free operation counter.

use std::sync::atomic::{AtomicU64, Ordering};

use duoslot_core::{ListObserver, OpKind};

use crate::stats::OpStats;

/// Observer that keeps one atomic counter per [`OpKind`].
///
/// Cheap enough to stay attached in production: every notification is a
/// single relaxed `fetch_add`. Element types are not tracked; use the
/// channel observer when per-type counts are needed.
#[derive(Debug, Default)]
pub struct OpCounter {
    counts: [AtomicU64; OpKind::COUNT],
}

impl OpCounter {
    /// Counter with every kind at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `kind` notifications seen since creation or the last reset.
    pub fn count(&self, kind: OpKind) -> u64 {
        self.counts[kind.index()].load(Ordering::Relaxed)
    }

    /// Sum over every kind.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|c| c.load(Ordering::Relaxed)).sum()
    }

    /// Copy the current counts into an [`OpStats`], untyped.
    ///
    /// Counts may be torn across kinds if lists keep running while the
    /// snapshot is taken.
    pub fn snapshot(&self) -> OpStats {
        let mut stats = OpStats::new();
        for kind in OpKind::ALL {
            stats.record(kind, None, self.count(kind));
        }
        stats
    }

    /// Set every counter back to zero.
    pub fn reset(&self) {
        for c in &self.counts {
            c.store(0, Ordering::Relaxed);
        }
    }
}

impl ListObserver for OpCounter {
    fn on_operation(&self, kind: OpKind) {
        self.counts[kind.index()].fetch_add(1, Ordering::Relaxed);
    }
}
