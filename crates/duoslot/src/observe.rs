//! Per-list observer slot.

use std::fmt;
use std::sync::Arc;

use duoslot_core::{ListObserver, OpKind};

/// Optional observer attached to one list.
#[derive(Clone, Default)]
pub(crate) struct Notifier {
    observer: Option<Arc<dyn ListObserver>>,
}

impl Notifier {
    pub(crate) fn op(&self, kind: OpKind) {
        if let Some(observer) = &self.observer {
            observer.on_operation(kind);
        }
    }

    pub(crate) fn typed<T>(&self, kind: OpKind) {
        if let Some(observer) = &self.observer {
            observer.on_typed_operation(kind, std::any::type_name::<T>());
        }
    }

    /// Install `observer`, returning the one it replaces.
    pub(crate) fn attach(
        &mut self,
        observer: Arc<dyn ListObserver>,
    ) -> Option<Arc<dyn ListObserver>> {
        self.observer.replace(observer)
    }

    pub(crate) fn detach(&mut self) -> Option<Arc<dyn ListObserver>> {
        self.observer.take()
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.observer.is_some()
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("attached", &self.is_attached())
            .finish()
    }
}
