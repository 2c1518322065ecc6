//! Aggregated operation counts.

use indexmap::IndexMap;

use duoslot_core::OpKind;

/// Element type recorded for notifications that carry no type name.
pub const UNTYPED: &str = "*";

/// One row of an [`OpStats`] table: element type, kind, count.
pub type StatsRow = (&'static str, OpKind, u64);

/// Operation counts, in total and per element type.
///
/// Both maps keep first-seen order, so [`rows`](Self::rows) is stable
/// for a given event sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpStats {
    totals: IndexMap<OpKind, u64>,
    by_type: IndexMap<&'static str, IndexMap<OpKind, u64>>,
}

impl OpStats {
    /// Empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count `n` occurrences of `kind` for `element_type`.
    ///
    /// Untyped notifications are recorded under [`UNTYPED`].
    pub fn record(&mut self, kind: OpKind, element_type: Option<&'static str>, n: u64) {
        if n == 0 {
            return;
        }
        *self.totals.entry(kind).or_insert(0) += n;
        let per_type = self.by_type.entry(element_type.unwrap_or(UNTYPED)).or_default();
        *per_type.entry(kind).or_insert(0) += n;
    }

    /// Total count for `kind` across all element types.
    pub fn count(&self, kind: OpKind) -> u64 {
        self.totals.get(&kind).copied().unwrap_or(0)
    }

    /// Count for `kind` recorded against `element_type`.
    pub fn count_for(&self, element_type: &str, kind: OpKind) -> u64 {
        self.by_type
            .get(element_type)
            .and_then(|kinds| kinds.get(&kind))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of every count.
    pub fn total(&self) -> u64 {
        self.totals.values().sum()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Totals per kind in first-seen order.
    pub fn totals(&self) -> &IndexMap<OpKind, u64> {
        &self.totals
    }

    /// Element type names in first-seen order.
    pub fn element_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_type.keys().copied()
    }

    /// Add every count from `other` into `self`.
    pub fn merge(&mut self, other: &OpStats) {
        for (element_type, kinds) in &other.by_type {
            for (&kind, &n) in kinds {
                let ty = if *element_type == UNTYPED {
                    None
                } else {
                    Some(*element_type)
                };
                self.record(kind, ty, n);
            }
        }
    }

    /// Flatten into `(element_type, kind, count)` rows for report writers.
    pub fn rows(&self) -> impl Iterator<Item = StatsRow> + '_ {
        self.by_type.iter().flat_map(|(&element_type, kinds)| {
            kinds.iter().map(move |(&kind, &n)| (element_type, kind, n))
        })
    }
}
