//! Error types for the duoslot containers.
//!
//! One enum covers every failure a list or cursor can report. Each
//! operation validates its arguments before touching storage, so an
//! `Err` always means the container is unchanged.

use std::error::Error;
use std::fmt;

/// Which index range an operation validated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndexBound {
    /// Element access: valid indices are `0..len`.
    Access,
    /// Insertion position: valid indices are `0..=len`.
    Insert,
}

impl fmt::Display for IndexBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Access => write!(f, "access"),
            Self::Insert => write!(f, "insert"),
        }
    }
}

/// Errors reported by list operations and cursors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// An index argument fell outside the range allowed by the operation.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Length of the list when the check ran.
        len: usize,
        /// Whether the access or the insert range applied.
        bound: IndexBound,
    },
    /// A cursor `set` or `remove` was called without a preceding,
    /// still-valid `next` or `previous`.
    IllegalState {
        /// The cursor operation that was rejected.
        operation: &'static str,
    },
    /// A cursor was advanced past one of the ends.
    NoSuchElement,
    /// Growing the buffer would exceed the maximum capacity.
    CapacityExceeded {
        /// Capacity the operation needed.
        requested: usize,
        /// Largest capacity the list may hold.
        max: usize,
    },
    /// A construction parameter was rejected.
    InvalidArgument {
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl ListError {
    /// Build an [`IndexOutOfRange`](Self::IndexOutOfRange) for the access range.
    pub fn access(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            index,
            len,
            bound: IndexBound::Access,
        }
    }

    /// Build an [`IndexOutOfRange`](Self::IndexOutOfRange) for the insert range.
    pub fn insert(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            index,
            len,
            bound: IndexBound::Insert,
        }
    }

    /// Check `index < len`.
    pub fn check_access(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::access(index, len))
        }
    }

    /// Check `index <= len`.
    pub fn check_insert(index: usize, len: usize) -> Result<(), Self> {
        if index <= len {
            Ok(())
        } else {
            Err(Self::insert(index, len))
        }
    }
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len, bound } => match bound {
                IndexBound::Access => {
                    write!(f, "index {index} out of range for length {len}")
                }
                IndexBound::Insert => {
                    write!(f, "insert index {index} out of range for length {len}")
                }
            },
            Self::IllegalState { operation } => {
                write!(
                    f,
                    "cursor {operation} called without a preceding next or previous"
                )
            }
            Self::NoSuchElement => write!(f, "cursor moved past the end"),
            Self::CapacityExceeded { requested, max } => {
                write!(
                    f,
                    "capacity exceeded: requested {requested} elements, max {max}"
                )
            }
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl Error for ListError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_access_rejects_len() {
        assert!(ListError::check_access(2, 3).is_ok());
        assert_eq!(ListError::check_access(3, 3), Err(ListError::access(3, 3)));
        assert!(ListError::check_access(0, 0).is_err());
    }

    #[test]
    fn check_insert_accepts_len() {
        assert!(ListError::check_insert(3, 3).is_ok());
        assert_eq!(ListError::check_insert(4, 3), Err(ListError::insert(4, 3)));
    }

    #[test]
    fn display_distinguishes_bounds() {
        let access = ListError::access(5, 2).to_string();
        let insert = ListError::insert(5, 2).to_string();
        assert_eq!(access, "index 5 out of range for length 2");
        assert_eq!(insert, "insert index 5 out of range for length 2");
    }

    #[test]
    fn display_capacity_exceeded() {
        let err = ListError::CapacityExceeded {
            requested: 9,
            max: 8,
        };
        assert_eq!(
            err.to_string(),
            "capacity exceeded: requested 9 elements, max 8"
        );
    }

    #[test]
    fn errors_are_std_errors() {
        let err: Box<dyn Error> = Box::new(ListError::NoSuchElement);
        assert!(err.source().is_none());
    }
}
