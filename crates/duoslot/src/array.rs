//! Plain growable array.
//!
//! [`ArrayList`] always keeps its elements in an owned buffer. It grows
//! by the same doubling rule as [`TwoSlotList`](crate::TwoSlotList) but
//! never returns to inline storage; its mode is `Empty` while it owns no
//! allocation and `Dynamic` otherwise.

use std::sync::Arc;

use duoslot_core::{ListConfig, ListError, ListObserver, Mode, OpKind, Sequence};

use crate::cell::Buffer;
use crate::iter::Iter;
use crate::observe::Notifier;
use crate::policy::CapacityPolicy;
use crate::surface::list_surface;

/// Growable list backed by a single buffer.
///
/// Not synchronised: share it across threads only behind an external lock.
#[derive(Clone)]
pub struct ArrayList<T> {
    buffer: Buffer<T>,
    policy: CapacityPolicy,
    notifier: Notifier,
}

impl<T> ArrayList<T> {
    /// Create an empty list without allocating.
    pub fn new() -> Self {
        Self {
            buffer: Buffer::new(),
            policy: CapacityPolicy::for_type::<T>(&ListConfig::new()),
            notifier: Notifier::default(),
        }
    }

    /// Create an empty list with room for exactly `capacity` elements.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidArgument`] if `capacity` exceeds the platform
    /// limit for `T`, [`ListError::CapacityExceeded`] if the allocation
    /// is refused.
    pub fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        Self::with_config(ListConfig::with_initial_capacity(capacity))
    }

    /// Create an empty list from an explicit configuration, allocating
    /// `initial_capacity` up front.
    ///
    /// # Errors
    ///
    /// As [`with_capacity`](Self::with_capacity), plus any config
    /// validation failure.
    pub fn with_config(config: ListConfig) -> Result<Self, ListError> {
        config.validate()?;
        let policy = CapacityPolicy::for_type::<T>(&config);
        if config.initial_capacity > policy.max() {
            return Err(ListError::InvalidArgument {
                reason: format!(
                    "initial_capacity {} exceeds the limit of {} for this element type",
                    config.initial_capacity,
                    policy.max()
                ),
            });
        }
        Ok(Self {
            buffer: Buffer::with_capacity(config.initial_capacity, policy.max())?,
            policy,
            notifier: Notifier::default(),
        })
    }

    /// Builder-style variant of `attach_observer`.
    pub fn with_observer(mut self, observer: Arc<dyn ListObserver>) -> Self {
        self.notifier.attach(observer);
        self
    }

    /// Sizing rules in effect for this list.
    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    /// Borrow the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<T> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        self.remove(len - 1).ok()
    }

    /// Keep only the elements for which `keep` returns `true`.
    ///
    /// `keep` runs exactly once per element, front to back. Returns
    /// whether anything was removed. Capacity is unchanged.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) -> bool {
        self.notifier.op(OpKind::Search);
        let before = self.buffer.len();
        self.buffer.retain(keep);
        let removed = before - self.buffer.len();
        for _ in 0..removed {
            self.notifier.op(OpKind::Remove);
        }
        removed > 0
    }

    /// Move the elements into a `Vec` without copying them.
    pub fn into_vec(self) -> Vec<T> {
        self.buffer.into_vec()
    }

    pub(crate) fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub(crate) fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    pub(crate) fn raw_iter(&self) -> Iter<'_, T> {
        Iter::slice(self.buffer.as_slice())
    }

    fn make_room(&mut self, required: usize) -> Result<(), ListError> {
        let current = self.buffer.capacity();
        if required <= current {
            return Ok(());
        }
        let max = self.policy.max();
        let target = self
            .policy
            .grow_target(current, required)
            .inspect_err(|_| tracing::debug!(required, max, "growth refused"))?;
        self.buffer.reserve_to(target, max)?;
        self.notifier.op(OpKind::Grow);
        tracing::trace!(from = current, to = target, "buffer grown");
        Ok(())
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            buffer: Buffer::from_vec(values),
            ..Self::new()
        }
    }
}

impl<T> Sequence<T> for ArrayList<T> {
    fn len(&self) -> usize {
        self.buffer.len()
    }

    fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    fn mode(&self) -> Mode {
        if self.buffer.capacity() == 0 {
            Mode::Empty
        } else {
            Mode::Dynamic
        }
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        let value = self
            .buffer
            .as_slice()
            .get(index)
            .ok_or_else(|| ListError::access(index, self.buffer.len()))?;
        self.notifier.op(OpKind::Get);
        Ok(value)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let len = self.buffer.len();
        if index >= len {
            return Err(ListError::access(index, len));
        }
        self.notifier.op(OpKind::Get);
        self.buffer
            .get_mut(index)
            .ok_or_else(|| ListError::access(index, len))
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        let len = self.buffer.len();
        let slot = self
            .buffer
            .get_mut(index)
            .ok_or_else(|| ListError::access(index, len))?;
        let previous = std::mem::replace(slot, value);
        self.notifier.typed::<T>(OpKind::Set);
        Ok(previous)
    }

    fn push(&mut self, value: T) -> Result<(), ListError> {
        self.insert(self.buffer.len(), value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let len = self.buffer.len();
        ListError::check_insert(index, len)?;
        self.make_room(len + 1)?;
        self.buffer.insert(index, value);
        self.notifier.typed::<T>(OpKind::Insert);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        ListError::check_access(index, self.buffer.len())?;
        let removed = self.buffer.remove(index);
        self.notifier.op(OpKind::Remove);
        Ok(removed)
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.notifier.op(OpKind::Search);
        self.buffer.as_slice().iter().position(|element| element == value)
    }

    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.notifier.op(OpKind::Search);
        self.buffer
            .as_slice()
            .iter()
            .rposition(|element| element == value)
    }

    fn clear(&mut self) {
        self.buffer = Buffer::new();
        self.notifier.op(OpKind::Clear);
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.buffer.as_slice().to_vec()
    }

    fn remove_all(&mut self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.retain(|element| !other.contains(element))
    }

    fn retain_all(&mut self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.retain(|element| other.contains(element))
    }

    fn ensure_capacity(&mut self, min_capacity: usize) -> Result<(), ListError> {
        self.make_room(min_capacity)
    }

    /// Shrinks to exactly `len`; an empty list releases its allocation.
    fn trim_to_size(&mut self) {
        if self.buffer.capacity() > self.buffer.len() {
            let from = self.buffer.capacity();
            self.buffer.shrink_to_fit();
            self.notifier.op(OpKind::Shrink);
            tracing::trace!(from, to = self.buffer.capacity(), "buffer trimmed");
        }
    }
}

list_surface!(ArrayList);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_list_owns_no_buffer() {
        let list: ArrayList<u8> = ArrayList::new();
        assert_eq!(list.mode(), Mode::Empty);
        assert_eq!(list.capacity(), 0);
    }

    #[test]
    fn growth_doubles_from_one() {
        let mut list = ArrayList::new();
        let mut capacities = Vec::new();
        for v in 0..9 {
            list.push(v).unwrap();
            capacities.push(list.capacity());
        }
        assert_eq!(capacities, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(list.mode(), Mode::Dynamic);
    }

    #[test]
    fn never_demotes() {
        let mut list: ArrayList<i32> = (0..5).collect();
        while list.pop().is_some() {}
        assert_eq!(list.mode(), Mode::Dynamic);
        assert_eq!(list.capacity(), 5);
    }

    #[test]
    fn trim_on_empty_releases_buffer() {
        let mut list: ArrayList<i32> = (0..5).collect();
        list.retain_all(&[]);
        list.trim_to_size();
        assert_eq!(list.mode(), Mode::Empty);
        assert_eq!(list.capacity(), 0);
    }

    #[test]
    fn with_capacity_allocates_eagerly() {
        let list: ArrayList<u32> = ArrayList::with_capacity(10).unwrap();
        assert_eq!(list.capacity(), 10);
        assert_eq!(list.mode(), Mode::Dynamic);
        assert!(list.is_empty());
    }

    #[test]
    fn trim_releases_allocation_adopted_from_vec() {
        let mut values = Vec::with_capacity(1000);
        values.extend([1u32, 2, 3]);
        let mut list = ArrayList::from(values);
        list.trim_to_size();
        assert_eq!(list.capacity(), 3);
        assert_eq!(list.into_vec().capacity(), 3);
    }

    #[test]
    fn ensure_capacity_uses_doubling() {
        let mut list: ArrayList<u32> = ArrayList::with_capacity(4).unwrap();
        list.ensure_capacity(5).unwrap();
        assert_eq!(list.capacity(), 8);
        list.ensure_capacity(3).unwrap();
        assert_eq!(list.capacity(), 8);
    }

    #[test]
    fn clear_releases_buffer() {
        let mut list: ArrayList<i32> = (0..5).collect();
        list.clear();
        assert_eq!(list.mode(), Mode::Empty);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn positional_ops_shift_elements() {
        let mut list: ArrayList<char> = "ace".chars().collect();
        list.insert(1, 'b').unwrap();
        list.insert(3, 'd').unwrap();
        assert_eq!(list.as_slice(), &['a', 'b', 'c', 'd', 'e']);
        assert_eq!(list.remove(0), Ok('a'));
        assert_eq!(list.as_slice(), &['b', 'c', 'd', 'e']);
        assert_eq!(list.remove(4), Err(ListError::access(4, 4)));
        assert_eq!(list.insert(5, 'z'), Err(ListError::insert(5, 4)));
    }

    #[test]
    fn retain_all_compacts_in_order() {
        let mut list: ArrayList<char> = "axbxc".chars().collect();
        assert!(list.retain_all(&['x']));
        assert_eq!(list, vec!['x', 'x']);
    }

    #[test]
    fn capacity_exceeded_leaves_list_intact() {
        let config = ListConfig {
            initial_capacity: 3,
            max_capacity: 3,
        };
        let mut list = ArrayList::with_config(config).unwrap();
        list.try_extend([1, 2, 3]).unwrap();
        assert!(matches!(
            list.push(4),
            Err(ListError::CapacityExceeded { requested: 4, max: 3 })
        ));
        assert_eq!(list, vec![1, 2, 3]);
    }
}
