//! Operation notifications for external statistics collectors.
//!
//! A list may hold one [`ListObserver`]. The observer is told which kind
//! of operation ran and, for operations that store a value, the element
//! type name. It never receives a reference to the list, so it cannot
//! mutate it. Implementations must not block or panic.

use std::fmt;

/// Kind of structural or access operation performed on a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OpKind {
    /// An element was inserted (append or positional).
    Insert,
    /// An element was removed (positional, by value, or by bulk pass).
    Remove,
    /// Storage grew: promotion out of inline slots or buffer reallocation.
    Grow,
    /// Storage shrank: demotion back to inline slots or an explicit trim.
    Shrink,
    /// The list was cleared.
    Clear,
    /// An element was read by index.
    Get,
    /// An element was replaced in place.
    Set,
    /// A cursor or borrowing iterator was created.
    Iterate,
    /// A linear search ran (`index_of`, `contains`, bulk membership pass).
    Search,
}

impl OpKind {
    /// Every kind, in declaration order.
    pub const ALL: [OpKind; 9] = [
        OpKind::Insert,
        OpKind::Remove,
        OpKind::Grow,
        OpKind::Shrink,
        OpKind::Clear,
        OpKind::Get,
        OpKind::Set,
        OpKind::Iterate,
        OpKind::Search,
    ];

    /// Number of distinct kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// Dense index in `0..COUNT`, usable for fixed-size counter tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Remove => "remove",
            Self::Grow => "grow",
            Self::Shrink => "shrink",
            Self::Clear => "clear",
            Self::Get => "get",
            Self::Set => "set",
            Self::Iterate => "iterate",
            Self::Search => "search",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Receiver of list operation notifications.
///
/// Calls are synchronous and fire-and-forget: the list ignores anything
/// the observer does and expects it to return promptly.
pub trait ListObserver: Send + Sync {
    /// An operation of the given kind ran.
    fn on_operation(&self, kind: OpKind);

    /// An operation ran that stored a value of `element_type`.
    ///
    /// The default forwards to [`on_operation`](Self::on_operation).
    fn on_typed_operation(&self, kind: OpKind, element_type: &'static str) {
        let _ = element_type;
        self.on_operation(kind);
    }
}

/// Observer that discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl ListObserver for NoopObserver {
    fn on_operation(&self, _kind: OpKind) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn indices_are_dense() {
        for (i, kind) in OpKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        assert_eq!(OpKind::COUNT, 9);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(OpKind::Grow.to_string(), "grow");
        assert_eq!(OpKind::Iterate.to_string(), "iterate");
    }

    #[test]
    fn typed_operation_defaults_to_untyped() {
        struct Recorder(Mutex<Vec<OpKind>>);
        impl ListObserver for Recorder {
            fn on_operation(&self, kind: OpKind) {
                self.0.lock().unwrap().push(kind);
            }
        }

        let rec = Recorder(Mutex::new(Vec::new()));
        rec.on_typed_operation(OpKind::Insert, "u32");
        rec.on_operation(OpKind::Get);
        assert_eq!(*rec.0.lock().unwrap(), vec![OpKind::Insert, OpKind::Get]);
    }
}
