//! Raw element storage: two inline slots or an owned buffer.
//!
//! [`InlineSlots`] holds up to two elements in dedicated fields.
//! [`Buffer`] is a `Vec<T>` paired with the logical capacity granted by
//! the capacity policy. Neither type makes policy decisions; they only
//! move elements around and report what they hold.

use duoslot_core::{ListError, Mode};

/// Number of elements held without a buffer.
pub const INLINE_CAPACITY: usize = 2;

/// Two element slots filled front to back.
///
/// Invariant: `slot1.is_some()` implies `slot0.is_some()`.
#[derive(Clone)]
pub(crate) struct InlineSlots<T> {
    slot0: Option<T>,
    slot1: Option<T>,
}

impl<T> InlineSlots<T> {
    pub(crate) fn new() -> Self {
        Self {
            slot0: None,
            slot1: None,
        }
    }

    pub(crate) fn len(&self) -> usize {
        match (&self.slot0, &self.slot1) {
            (None, _) => 0,
            (Some(_), None) => 1,
            (Some(_), Some(_)) => 2,
        }
    }

    pub(crate) fn mode(&self) -> Mode {
        match self.len() {
            0 => Mode::Empty,
            1 => Mode::Inline1,
            _ => Mode::Inline2,
        }
    }

    pub(crate) fn is_full(&self) -> bool {
        self.slot1.is_some()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        match index {
            0 => self.slot0.as_ref(),
            1 => self.slot1.as_ref(),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match index {
            0 => self.slot0.as_mut(),
            1 => self.slot1.as_mut(),
            _ => None,
        }
    }

    /// Insert at `index <= len`. The caller guarantees a free slot.
    pub(crate) fn insert(&mut self, index: usize, value: T) {
        debug_assert!(!self.is_full());
        debug_assert!(index <= self.len());
        if index == 0 {
            self.slot1 = self.slot0.take();
            self.slot0 = Some(value);
        } else {
            self.slot1 = Some(value);
        }
    }

    /// Remove the element at `index`, moving `slot1` forward if needed.
    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        match index {
            0 => {
                let removed = self.slot0.take();
                self.slot0 = self.slot1.take();
                removed
            }
            1 => self.slot1.take(),
            _ => None,
        }
    }

    /// Move both slots out, leaving the storage empty.
    pub(crate) fn take(&mut self) -> (Option<T>, Option<T>) {
        (self.slot0.take(), self.slot1.take())
    }

    /// Refill from up to two elements in order.
    pub(crate) fn fill<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let mut values = values.into_iter();
        self.slot0 = values.next();
        self.slot1 = if self.slot0.is_some() {
            values.next()
        } else {
            None
        };
        debug_assert!(values.next().is_none());
    }

    pub(crate) fn into_vec(mut self) -> Vec<T> {
        let (a, b) = self.take();
        a.into_iter().chain(b).collect()
    }
}

/// Owned contiguous buffer with an explicit logical capacity.
///
/// `capacity` is what the capacity policy granted; the underlying `Vec`
/// has reserved at least that much, so inserts up to `capacity` never
/// reallocate. Removed elements are dropped immediately.
#[derive(Clone)]
pub(crate) struct Buffer<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> Buffer<T> {
    /// A buffer with no allocation.
    pub(crate) fn new() -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
        }
    }

    /// Allocate room for exactly `capacity` elements.
    ///
    /// `max` is only used to describe a refused allocation.
    pub(crate) fn with_capacity(capacity: usize, max: usize) -> Result<Self, ListError> {
        let mut buffer = Self::new();
        buffer.reserve_to(capacity, max)?;
        Ok(buffer)
    }

    /// Adopt an existing vector, releasing its spare capacity so the
    /// logical capacity is its length.
    pub(crate) fn from_vec(mut data: Vec<T>) -> Self {
        data.shrink_to_fit();
        let capacity = data.len();
        Self { data, capacity }
    }

    /// Raise the logical capacity to `capacity`, reallocating once.
    ///
    /// On failure the buffer is unchanged.
    pub(crate) fn reserve_to(&mut self, capacity: usize, max: usize) -> Result<(), ListError> {
        if capacity <= self.capacity {
            return Ok(());
        }
        self.data
            .try_reserve_exact(capacity - self.data.len())
            .map_err(|_| ListError::CapacityExceeded {
                requested: capacity,
                max,
            })?;
        self.capacity = capacity;
        Ok(())
    }

    /// Drop spare capacity so that `capacity == len`.
    pub(crate) fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
        self.capacity = self.data.len();
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Insert at `index <= len`. The caller guarantees `len < capacity`.
    pub(crate) fn insert(&mut self, index: usize, value: T) {
        debug_assert!(self.data.len() < self.capacity);
        self.data.insert(index, value);
    }

    /// Remove at `index < len`, shifting the tail left.
    pub(crate) fn remove(&mut self, index: usize) -> T {
        self.data.remove(index)
    }

    /// Stable in-place compaction; `keep` runs once per element, in order.
    pub(crate) fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        self.data.retain(keep);
    }

    /// Move every element out, leaving the allocation in place.
    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, T> {
        self.data.drain(..)
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.data
    }
}
