//! Test utilities for duoslot development.
//!
//! Provides a `Vec`-backed reference implementation of [`Sequence`]
//! ([`VecModel`]), scripted operations that can be replayed against any
//! implementation ([`Op`], [`apply`]) with proptest strategies to
//! generate them, and a [`RecordingObserver`] mock.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod model;
mod script;

use std::sync::Mutex;

use duoslot_core::{ListObserver, OpKind};

pub use model::VecModel;
pub use script::{apply, op, ops, Op, Outcome};

pub use duoslot_core::Sequence;

/// Mock observer that records every notification in order.
///
/// Typed notifications keep their element type; untyped ones record
/// `None`.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<(OpKind, Option<&'static str>)>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notification seen so far.
    pub fn events(&self) -> Vec<(OpKind, Option<&'static str>)> {
        self.events.lock().unwrap().clone()
    }

    /// Just the kinds, in order.
    pub fn kinds(&self) -> Vec<OpKind> {
        self.events.lock().unwrap().iter().map(|(k, _)| *k).collect()
    }

    /// How many notifications of `kind` were seen.
    pub fn count(&self, kind: OpKind) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl ListObserver for RecordingObserver {
    fn on_operation(&self, kind: OpKind) {
        self.events.lock().unwrap().push((kind, None));
    }

    fn on_typed_operation(&self, kind: OpKind, element_type: &'static str) {
        self.events.lock().unwrap().push((kind, Some(element_type)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_observer_keeps_order_and_types() {
        let rec = RecordingObserver::new();
        rec.on_typed_operation(OpKind::Insert, "u32");
        rec.on_operation(OpKind::Get);
        assert_eq!(
            rec.events(),
            vec![(OpKind::Insert, Some("u32")), (OpKind::Get, None)]
        );
        assert_eq!(rec.count(OpKind::Get), 1);
        rec.clear();
        assert!(rec.kinds().is_empty());
    }
}
