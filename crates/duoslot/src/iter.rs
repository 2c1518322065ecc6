//! Borrowing iteration over any list variant.

use std::iter::FusedIterator;

use crate::cell::InlineSlots;

enum Source<'a, T> {
    Inline(&'a InlineSlots<T>),
    Slice(&'a [T]),
}

impl<T> Clone for Source<'_, T> {
    fn clone(&self) -> Self {
        match *self {
            Source::Inline(slots) => Source::Inline(slots),
            Source::Slice(slice) => Source::Slice(slice),
        }
    }
}

impl<'a, T> Source<'a, T> {
    fn get(&self, index: usize) -> Option<&'a T> {
        match *self {
            Source::Inline(slots) => slots.get(index),
            Source::Slice(slice) => slice.get(index),
        }
    }
}

/// Borrowing iterator over the elements of a list, front to back.
///
/// Holds a shared borrow of the list, so the list cannot change while
/// the iterator is alive.
pub struct Iter<'a, T> {
    source: Source<'a, T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn inline(slots: &'a InlineSlots<T>) -> Self {
        Self {
            front: 0,
            back: slots.len(),
            source: Source::Inline(slots),
        }
    }

    pub(crate) fn slice(slice: &'a [T]) -> Self {
        Self {
            front: 0,
            back: slice.len(),
            source: Source::Slice(slice),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.source.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.source.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_iter_both_ends() {
        let mut slots = InlineSlots::new();
        slots.fill([1, 2]);
        let mut it = Iter::inline(&slots);
        assert_eq!(it.len(), 2);
        assert_eq!(it.next_back(), Some(&2));
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn slice_iter_collects_in_order() {
        let data = [1, 2, 3, 4];
        let collected: Vec<_> = Iter::slice(&data).copied().collect();
        assert_eq!(collected, vec![1, 2, 3, 4]);
        let reversed: Vec<_> = Iter::slice(&data).rev().copied().collect();
        assert_eq!(reversed, vec![4, 3, 2, 1]);
    }
}
