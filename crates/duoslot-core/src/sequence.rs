//! The ordered-sequence contract shared by every list variant.

use std::fmt;

use crate::error::ListError;

/// Which storage representation a list is currently using.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Inline storage, no elements.
    Empty,
    /// Inline storage, one element in the first slot.
    Inline1,
    /// Inline storage, both slots occupied.
    Inline2,
    /// Elements live in a separately allocated buffer.
    Dynamic,
}

impl Mode {
    /// Whether the mode uses the inline slots.
    pub fn is_inline(self) -> bool {
        !matches!(self, Mode::Dynamic)
    }

    /// The inline mode that holds exactly `len` elements, if any.
    pub fn inline_for(len: usize) -> Option<Mode> {
        match len {
            0 => Some(Mode::Empty),
            1 => Some(Mode::Inline1),
            2 => Some(Mode::Inline2),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Inline1 => write!(f, "inline1"),
            Self::Inline2 => write!(f, "inline2"),
            Self::Dynamic => write!(f, "dynamic"),
        }
    }
}

/// Indexed, growable sequence of `T`.
///
/// Implemented by every list variant so callers and test helpers can be
/// written once. All fallible operations validate their arguments before
/// touching storage: on `Err` the sequence is unchanged.
///
/// Equality for searches is `PartialEq`. An absent value is modelled by
/// using `Option<U>` as the element type, where `None` matches only `None`.
pub trait Sequence<T> {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of elements the current storage holds without growing.
    fn capacity(&self) -> usize;

    /// Current storage representation.
    fn mode(&self) -> Mode;

    /// Borrow the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index >= len`.
    fn get(&self, index: usize) -> Result<&T, ListError>;

    /// Mutably borrow the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index >= len`.
    fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError>;

    /// Replace the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index >= len`.
    fn set(&mut self, index: usize, value: T) -> Result<T, ListError>;

    /// Append `value` at the end.
    ///
    /// # Errors
    ///
    /// [`ListError::CapacityExceeded`] if the buffer cannot grow.
    fn push(&mut self, value: T) -> Result<(), ListError>;

    /// Insert `value` at `index`, shifting later elements right.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index > len`,
    /// [`ListError::CapacityExceeded`] if the buffer cannot grow.
    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError>;

    /// Remove and return the element at `index`, shifting later elements left.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index >= len`.
    fn remove(&mut self, index: usize) -> Result<T, ListError>;

    /// Remove the first element equal to `value`. Returns whether one was found.
    fn remove_item(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }

    /// Index of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Index of the last element equal to `value`.
    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Whether any element equals `value`.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Remove every element and release any buffer.
    fn clear(&mut self);

    /// Copy the elements, in order, into a new `Vec`.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;

    /// Whether every element of `other` is contained in the sequence.
    fn contains_all(&self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        other.iter().all(|value| self.contains(value))
    }

    /// Remove every element that is contained in `other`, keeping the
    /// relative order of survivors. Returns whether anything was removed.
    fn remove_all(&mut self, other: &[T]) -> bool
    where
        T: PartialEq;

    /// Keep only elements contained in `other`, keeping their relative
    /// order. Returns whether anything was removed.
    fn retain_all(&mut self, other: &[T]) -> bool
    where
        T: PartialEq;

    /// Make room for at least `min_capacity` elements.
    ///
    /// # Errors
    ///
    /// [`ListError::CapacityExceeded`] if `min_capacity` is above the limit.
    fn ensure_capacity(&mut self, min_capacity: usize) -> Result<(), ListError>;

    /// Shrink the storage to fit the current length.
    fn trim_to_size(&mut self);
}
