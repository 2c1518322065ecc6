//! Statistics collectors for duoslot lists.
//!
//! Two [`ListObserver`](duoslot_core::ListObserver) implementations:
//!
//! - [`OpCounter`]: one atomic counter per operation kind, shared by any
//!   number of lists behind an `Arc`.
//! - [`ChannelObserver`]: forwards typed events over a bounded channel to
//!   a [`StatsCollector`], which aggregates them into [`OpStats`] with
//!   per-element-type breakdowns.
//!
//! [`OpStats::rows`] flattens the result for report writers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod channel;
pub mod counter;
pub mod stats;

pub use channel::{stats_channel, ChannelObserver, OpEvent, StatsCollector};
pub use counter::OpCounter;
pub use stats::{OpStats, StatsRow, UNTYPED};
