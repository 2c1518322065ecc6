//! Forward and bidirectional cursors with in-place mutation.
//!
//! A cursor holds `&mut` to its list for its whole lifetime, so the list
//! cannot be mutated except through the cursor while it is alive. The
//! cursors carry no modification counter: every step re-reads the list
//! by index, and every error comes from the list's own bounds checks.
//!
//! The cursor position sits *between* elements. `next_index()` is the
//! index of the element `next()` would return. The "last returned"
//! marker records the element a `set` or `remove` applies to; it is
//! cleared by `remove` and `add`.

use std::marker::PhantomData;

use duoslot_core::{ListError, Sequence};

/// Bidirectional cursor over a [`Sequence`].
pub struct ListCursor<'a, T, S: Sequence<T> + ?Sized> {
    list: &'a mut S,
    cursor: usize,
    last_returned: Option<usize>,
    _elem: PhantomData<fn() -> T>,
}

impl<'a, T, S: Sequence<T> + ?Sized> ListCursor<'a, T, S> {
    /// Cursor positioned before the first element.
    pub fn new(list: &'a mut S) -> Self {
        Self {
            list,
            cursor: 0,
            last_returned: None,
            _elem: PhantomData,
        }
    }

    /// Cursor positioned before the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index > len`.
    pub fn at(list: &'a mut S, index: usize) -> Result<Self, ListError> {
        ListError::check_insert(index, list.len())?;
        let mut cursor = Self::new(list);
        cursor.cursor = index;
        Ok(cursor)
    }

    /// Whether `next` would return an element.
    pub fn has_next(&self) -> bool {
        self.cursor < self.list.len()
    }

    /// Whether `previous` would return an element.
    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    /// Index of the element `next` would return.
    pub fn next_index(&self) -> usize {
        self.cursor
    }

    /// Index of the element `previous` would return, `None` at the front.
    pub fn previous_index(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }

    /// Return the next element and advance past it.
    ///
    /// # Errors
    ///
    /// [`ListError::NoSuchElement`] at the end of the list.
    pub fn next(&mut self) -> Result<&T, ListError> {
        if !self.has_next() {
            return Err(ListError::NoSuchElement);
        }
        let index = self.cursor;
        self.cursor += 1;
        self.last_returned = Some(index);
        self.list.get(index)
    }

    /// Step back and return the element before the cursor.
    ///
    /// # Errors
    ///
    /// [`ListError::NoSuchElement`] at the front of the list.
    pub fn previous(&mut self) -> Result<&T, ListError> {
        let index = self.previous_index().ok_or(ListError::NoSuchElement)?;
        self.cursor = index;
        self.last_returned = Some(index);
        self.list.get(index)
    }

    /// Remove the element last returned by `next` or `previous`.
    ///
    /// The cursor ends up where the removed element was.
    ///
    /// # Errors
    ///
    /// [`ListError::IllegalState`] unless a `next`/`previous` happened
    /// since the last `remove` or `add`.
    pub fn remove(&mut self) -> Result<T, ListError> {
        let index = self
            .last_returned
            .ok_or(ListError::IllegalState { operation: "remove" })?;
        let removed = self.list.remove(index)?;
        self.cursor = index;
        self.last_returned = None;
        Ok(removed)
    }

    /// Replace the element last returned by `next` or `previous`.
    ///
    /// Returns the replaced value. The marker stays valid, so `set` may
    /// be called repeatedly.
    ///
    /// # Errors
    ///
    /// [`ListError::IllegalState`] under the same conditions as `remove`.
    pub fn set(&mut self, value: T) -> Result<T, ListError> {
        let index = self
            .last_returned
            .ok_or(ListError::IllegalState { operation: "set" })?;
        self.list.set(index, value)
    }

    /// Insert `value` before the cursor and advance past it.
    ///
    /// A following `previous` returns the inserted value.
    ///
    /// # Errors
    ///
    /// [`ListError::CapacityExceeded`] if the list cannot grow.
    pub fn add(&mut self, value: T) -> Result<(), ListError> {
        self.list.insert(self.cursor, value)?;
        self.cursor += 1;
        self.last_returned = None;
        Ok(())
    }
}

/// Forward-only cursor over a [`Sequence`].
pub struct Cursor<'a, T, S: Sequence<T> + ?Sized> {
    inner: ListCursor<'a, T, S>,
}

impl<'a, T, S: Sequence<T> + ?Sized> Cursor<'a, T, S> {
    /// Cursor positioned before the first element.
    pub fn new(list: &'a mut S) -> Self {
        Self {
            inner: ListCursor::new(list),
        }
    }

    /// Whether `next` would return an element.
    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    /// Return the next element and advance past it.
    ///
    /// # Errors
    ///
    /// [`ListError::NoSuchElement`] at the end of the list.
    pub fn next(&mut self) -> Result<&T, ListError> {
        self.inner.next()
    }

    /// Remove the element last returned by `next`.
    ///
    /// # Errors
    ///
    /// [`ListError::IllegalState`] unless exactly one `next` happened
    /// since the last `remove`.
    pub fn remove(&mut self) -> Result<T, ListError> {
        self.inner.remove()
    }
}
