//! The two-slot inline list.
//!
//! [`TwoSlotList`] stores up to two elements in inline slots and moves
//! to an owned buffer when a third element arrives. Removing down to two
//! elements moves them back and releases the buffer.
//!
//! ```text
//! Empty --push--> Inline1 --push--> Inline2 --push--> Dynamic(cap 3)
//!   ^                                  ^                  |  grow: max(cap * 2, needed)
//!   '---------------- clear -----------+---- len <= 2 ----'
//! ```
//!
//! Every operation checks its arguments and reserves capacity before it
//! moves any element, so a failed call leaves the list as it was.

use std::sync::Arc;

use duoslot_core::{ListConfig, ListError, ListObserver, Mode, OpKind, Sequence};

use crate::cell::{Buffer, InlineSlots, INLINE_CAPACITY};
use crate::iter::Iter;
use crate::observe::Notifier;
use crate::policy::CapacityPolicy;
use crate::surface::list_surface;

#[derive(Clone)]
enum Storage<T> {
    Inline(InlineSlots<T>),
    Dynamic(Buffer<T>),
}

/// Growable list that keeps up to two elements inline.
///
/// Not synchronised: share it across threads only behind an external
/// lock. Cursors and iterators borrow the list, so it cannot be changed
/// behind their backs.
#[derive(Clone)]
pub struct TwoSlotList<T> {
    storage: Storage<T>,
    policy: CapacityPolicy,
    notifier: Notifier,
}

impl<T> TwoSlotList<T> {
    /// Create an empty list in inline mode.
    pub fn new() -> Self {
        Self {
            storage: Storage::Inline(InlineSlots::new()),
            policy: CapacityPolicy::for_type::<T>(&ListConfig::new()),
            notifier: Notifier::default(),
        }
    }

    /// Create an empty list that allocates at least `capacity` slots when
    /// it first leaves inline storage.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidArgument`] if `capacity` exceeds the platform
    /// limit for `T`.
    pub fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        Self::with_config(ListConfig::with_initial_capacity(capacity))
    }

    /// Create an empty list from an explicit configuration.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidArgument`] if the config fails validation or
    /// asks for more than the platform limit for `T`.
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
            storage: Storage::Inline(InlineSlots::new()),
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
    /// `keep` runs exactly once per element, front to back. Survivors
    /// keep their relative order. Returns whether anything was removed.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) -> bool {
        self.notifier.op(OpKind::Search);
        let before = self.len();
        match &mut self.storage {
            Storage::Inline(slots) => {
                let (first, second) = slots.take();
                slots.fill(first.into_iter().chain(second).filter(|value| keep(value)));
            }
            Storage::Dynamic(buffer) => buffer.retain(keep),
        }
        let removed = before - self.len();
        if removed == 0 {
            return false;
        }
        self.after_removal();
        for _ in 0..removed {
            self.notifier.op(OpKind::Remove);
        }
        true
    }

    /// Move the elements into a `Vec` without copying them.
    pub fn into_vec(self) -> Vec<T> {
        match self.storage {
            Storage::Inline(slots) => slots.into_vec(),
            Storage::Dynamic(buffer) => buffer.into_vec(),
        }
    }

    pub(crate) fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub(crate) fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    pub(crate) fn raw_iter(&self) -> Iter<'_, T> {
        match &self.storage {
            Storage::Inline(slots) => Iter::inline(slots),
            Storage::Dynamic(buffer) => Iter::slice(buffer.as_slice()),
        }
    }

    fn peek(&self, index: usize) -> Option<&T> {
        match &self.storage {
            Storage::Inline(slots) => slots.get(index),
            Storage::Dynamic(buffer) => buffer.as_slice().get(index),
        }
    }

    fn peek_mut(&mut self, index: usize) -> Option<&mut T> {
        match &mut self.storage {
            Storage::Inline(slots) => slots.get_mut(index),
            Storage::Dynamic(buffer) => buffer.get_mut(index),
        }
    }

    /// Make sure the storage can hold `required` elements, promoting out
    /// of inline slots or growing the buffer as needed.
    fn make_room(&mut self, required: usize) -> Result<(), ListError> {
        let max = self.policy.max();
        match &mut self.storage {
            Storage::Inline(slots) => {
                if required <= INLINE_CAPACITY {
                    return Ok(());
                }
                let capacity = self
                    .policy
                    .promotion_capacity(required)
                    .inspect_err(|_| tracing::debug!(required, max, "promotion refused"))?;
                let mut buffer = Buffer::with_capacity(capacity, max)?;
                let (first, second) = slots.take();
                for value in first.into_iter().chain(second) {
                    let end = buffer.len();
                    buffer.insert(end, value);
                }
                self.storage = Storage::Dynamic(buffer);
                self.policy.reset_promote_min();
                self.notifier.op(OpKind::Grow);
                tracing::trace!(capacity, "promoted to dynamic storage");
            }
            Storage::Dynamic(buffer) => {
                let current = buffer.capacity();
                if required <= current {
                    return Ok(());
                }
                let target = self
                    .policy
                    .grow_target(current, required)
                    .inspect_err(|_| tracing::debug!(required, max, "growth refused"))?;
                buffer.reserve_to(target, max)?;
                self.notifier.op(OpKind::Grow);
                tracing::trace!(from = current, to = target, "buffer grown");
            }
        }
        Ok(())
    }

    /// Return to inline storage once the buffer holds two or fewer elements.
    fn after_removal(&mut self) {
        if let Storage::Dynamic(buffer) = &mut self.storage {
            let len = buffer.len();
            if !self.policy.should_demote(len) {
                return;
            }
            let mut slots = InlineSlots::new();
            slots.fill(buffer.drain());
            self.storage = Storage::Inline(slots);
            self.notifier.op(OpKind::Shrink);
            tracing::trace!(len, "demoted to inline storage");
        }
    }
}

impl<T> From<Vec<T>> for TwoSlotList<T> {
    fn from(values: Vec<T>) -> Self {
        let mut list = Self::new();
        if values.len() <= INLINE_CAPACITY {
            let mut slots = InlineSlots::new();
            slots.fill(values);
            list.storage = Storage::Inline(slots);
        } else {
            list.storage = Storage::Dynamic(Buffer::from_vec(values));
        }
        list
    }
}

impl<T> Sequence<T> for TwoSlotList<T> {
    fn len(&self) -> usize {
        match &self.storage {
            Storage::Inline(slots) => slots.len(),
            Storage::Dynamic(buffer) => buffer.len(),
        }
    }

    fn capacity(&self) -> usize {
        match &self.storage {
            Storage::Inline(_) => INLINE_CAPACITY,
            Storage::Dynamic(buffer) => buffer.capacity(),
        }
    }

    fn mode(&self) -> Mode {
        match &self.storage {
            Storage::Inline(slots) => slots.mode(),
            Storage::Dynamic(_) => Mode::Dynamic,
        }
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        let value = self
            .peek(index)
            .ok_or_else(|| ListError::access(index, self.len()))?;
        self.notifier.op(OpKind::Get);
        Ok(value)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let len = self.len();
        if index >= len {
            return Err(ListError::access(index, len));
        }
        self.notifier.op(OpKind::Get);
        self.peek_mut(index)
            .ok_or_else(|| ListError::access(index, len))
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        let len = self.len();
        let slot = self
            .peek_mut(index)
            .ok_or_else(|| ListError::access(index, len))?;
        let previous = std::mem::replace(slot, value);
        self.notifier.typed::<T>(OpKind::Set);
        Ok(previous)
    }

    fn push(&mut self, value: T) -> Result<(), ListError> {
        self.insert(self.len(), value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let len = self.len();
        ListError::check_insert(index, len)?;
        self.make_room(len + 1)?;
        match &mut self.storage {
            Storage::Inline(slots) => slots.insert(index, value),
            Storage::Dynamic(buffer) => buffer.insert(index, value),
        }
        self.notifier.typed::<T>(OpKind::Insert);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        let len = self.len();
        ListError::check_access(index, len)?;
        let removed = match &mut self.storage {
            Storage::Inline(slots) => slots
                .remove(index)
                .ok_or_else(|| ListError::access(index, len))?,
            Storage::Dynamic(buffer) => buffer.remove(index),
        };
        self.after_removal();
        self.notifier.op(OpKind::Remove);
        Ok(removed)
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.notifier.op(OpKind::Search);
        self.raw_iter().position(|element| element == value)
    }

    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.notifier.op(OpKind::Search);
        self.raw_iter().rposition(|element| element == value)
    }

    fn clear(&mut self) {
        self.storage = Storage::Inline(InlineSlots::new());
        self.policy.reset_promote_min();
        self.notifier.op(OpKind::Clear);
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.raw_iter().cloned().collect()
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

    /// While inline, a request above two raises the capacity granted at
    /// the next promotion instead of allocating; the list stays inline
    /// until a third element arrives. `clear` drops the request.
    fn ensure_capacity(&mut self, min_capacity: usize) -> Result<(), ListError> {
        let inline = matches!(self.storage, Storage::Inline(_));
        if !inline {
            return self.make_room(min_capacity);
        }
        if min_capacity <= INLINE_CAPACITY {
            return Ok(());
        }
        self.policy.raise_promote_min(min_capacity)
    }

    fn trim_to_size(&mut self) {
        if let Storage::Dynamic(buffer) = &mut self.storage {
            if buffer.capacity() > buffer.len() {
                let from = buffer.capacity();
                buffer.shrink_to_fit();
                self.notifier.op(OpKind::Shrink);
                tracing::trace!(from, to = buffer.capacity(), "buffer trimmed");
            }
        }
    }
}

list_surface!(TwoSlotList);
