//! `Vec`-backed reference sequence.

use duoslot_core::{ListError, Mode, Sequence};

/// Reference implementation of [`Sequence`] over a plain `Vec`.
///
/// Reports the mode a two-slot list would have at the same length and
/// the `Vec`'s own capacity. Used as the oracle in differential tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VecModel<T> {
    items: Vec<T>,
}

impl<T> VecModel<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for VecModel<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> Sequence<T> for VecModel<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn capacity(&self) -> usize {
        self.items.capacity().max(self.items.len())
    }

    fn mode(&self) -> Mode {
        Mode::inline_for(self.items.len()).unwrap_or(Mode::Dynamic)
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        self.items
            .get(index)
            .ok_or_else(|| ListError::access(index, self.items.len()))
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or_else(|| ListError::access(index, len))
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    fn push(&mut self, value: T) -> Result<(), ListError> {
        self.items.push(value);
        Ok(())
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        ListError::check_insert(index, self.items.len())?;
        self.items.insert(index, value);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        ListError::check_access(index, self.items.len())?;
        Ok(self.items.remove(index))
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|e| e == value)
    }

    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().rposition(|e| e == value)
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    fn remove_all(&mut self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        let before = self.items.len();
        self.items.retain(|e| !other.contains(e));
        self.items.len() != before
    }

    fn retain_all(&mut self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        let before = self.items.len();
        self.items.retain(|e| other.contains(e));
        self.items.len() != before
    }

    fn ensure_capacity(&mut self, min_capacity: usize) -> Result<(), ListError> {
        self.items
            .reserve(min_capacity.saturating_sub(self.items.len()));
        Ok(())
    }

    fn trim_to_size(&mut self) {
        self.items.shrink_to_fit();
    }
}
