//! Channel-backed observer and its draining collector.
//!
//! [`stats_channel`] creates a bounded crossbeam pair. The
//! [`ChannelObserver`] end is attached to lists and never blocks: when
//! the channel is full the event is dropped and counted. The
//! [`StatsCollector`] end drains events into [`OpStats`] on whatever
//! thread owns it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, TrySendError};

use duoslot_core::{ListObserver, OpKind};

use crate::stats::OpStats;

/// A single notification as sent over the channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpEvent {
    /// Operation that ran.
    pub kind: OpKind,
    /// Element type name, for typed notifications.
    pub element_type: Option<&'static str>,
}

/// Create a connected observer/collector pair with room for `capacity`
/// in-flight events.
pub fn stats_channel(capacity: usize) -> (ChannelObserver, StatsCollector) {
    let (tx, rx) = crossbeam_channel::bounded(capacity);
    let dropped = Arc::new(AtomicU64::new(0));
    (
        ChannelObserver {
            tx,
            dropped: Arc::clone(&dropped),
        },
        StatsCollector {
            rx,
            dropped,
            stats: OpStats::new(),
        },
    )
}

/// Observer that forwards every notification to a [`StatsCollector`].
///
/// Clones share the channel and the dropped-event counter.
#[derive(Clone, Debug)]
pub struct ChannelObserver {
    tx: Sender<OpEvent>,
    dropped: Arc<AtomicU64>,
}

impl ChannelObserver {
    /// Events discarded because the channel was full or the collector
    /// was gone.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn send(&self, event: OpEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                if self.dropped.fetch_add(1, Ordering::Relaxed) == 0 {
                    tracing::debug!(kind = %event.kind, "stats channel full, dropping events");
                }
            }
            Err(TrySendError::Disconnected(_)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

impl ListObserver for ChannelObserver {
    fn on_operation(&self, kind: OpKind) {
        self.send(OpEvent {
            kind,
            element_type: None,
        });
    }

    fn on_typed_operation(&self, kind: OpKind, element_type: &'static str) {
        self.send(OpEvent {
            kind,
            element_type: Some(element_type),
        });
    }
}

/// Receiving end of [`stats_channel`].
#[derive(Debug)]
pub struct StatsCollector {
    rx: Receiver<OpEvent>,
    dropped: Arc<AtomicU64>,
    stats: OpStats,
}

impl StatsCollector {
    /// Move every queued event into the running statistics without
    /// blocking. Returns how many events were drained.
    pub fn drain(&mut self) -> usize {
        let mut drained = 0;
        for event in self.rx.try_iter() {
            self.stats.record(event.kind, event.element_type, 1);
            drained += 1;
        }
        drained
    }

    /// Block until every observer is dropped, draining as events arrive.
    pub fn drain_until_closed(&mut self) -> usize {
        let mut drained = 0;
        for event in self.rx.iter() {
            self.stats.record(event.kind, event.element_type, 1);
            drained += 1;
        }
        drained
    }

    /// Statistics accumulated so far.
    pub fn stats(&self) -> &OpStats {
        &self.stats
    }

    /// Return the accumulated statistics and start over from empty.
    pub fn take(&mut self) -> OpStats {
        std::mem::take(&mut self.stats)
    }

    /// Events the observers had to drop.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Finish collecting and return the statistics.
    pub fn into_stats(mut self) -> OpStats {
        self.drain();
        self.stats
    }
}
