//! Variant selection at construction time.
//!
//! [`AnyList`] wraps one of the concrete list types and forwards the
//! [`Sequence`] contract to it with a `match`, so callers can choose the
//! storage strategy at runtime without boxing.

use std::fmt;
use std::sync::Arc;

use duoslot_core::{ListConfig, ListError, ListObserver, Mode, Sequence};

use crate::array::ArrayList;
use crate::iter::Iter;
use crate::observe::Notifier;
use crate::surface::list_surface;
use crate::two_slot::TwoSlotList;

/// Storage strategy for an [`AnyList`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Two inline slots, promoted to a buffer on the third element and
    /// demoted again at two.
    #[default]
    TwoSlot,
    /// Always a buffer; never demotes.
    Array,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TwoSlot => write!(f, "two-slot"),
            Self::Array => write!(f, "array"),
        }
    }
}

#[derive(Clone)]
enum Variant<T> {
    TwoSlot(TwoSlotList<T>),
    Array(ArrayList<T>),
}

/// A list whose storage strategy is picked when it is created.
///
/// The observer slot lives on the inner list.
#[derive(Clone)]
pub struct AnyList<T> {
    variant: Variant<T>,
}

macro_rules! dispatch {
    ($self:expr, $list:ident => $body:expr) => {
        match $self {
            Variant::TwoSlot($list) => $body,
            Variant::Array($list) => $body,
        }
    };
}

impl<T> AnyList<T> {
    /// Create an empty list of the default kind ([`ListKind::TwoSlot`]).
    pub fn new() -> Self {
        Self::of_kind(ListKind::default())
    }

    /// Create an empty list of the given kind.
    pub fn of_kind(kind: ListKind) -> Self {
        let variant = match kind {
            ListKind::TwoSlot => Variant::TwoSlot(TwoSlotList::new()),
            ListKind::Array => Variant::Array(ArrayList::new()),
        };
        Self::wrap(variant)
    }

    /// Create an empty list of the given kind from a configuration.
    ///
    /// # Errors
    ///
    /// Whatever the chosen variant's `with_config` reports.
    pub fn with_config(kind: ListKind, config: ListConfig) -> Result<Self, ListError> {
        let variant = match kind {
            ListKind::TwoSlot => Variant::TwoSlot(TwoSlotList::with_config(config)?),
            ListKind::Array => Variant::Array(ArrayList::with_config(config)?),
        };
        Ok(Self::wrap(variant))
    }

    /// Builder-style variant of `attach_observer`.
    pub fn with_observer(mut self, observer: Arc<dyn ListObserver>) -> Self {
        self.attach_observer(observer);
        self
    }

    fn wrap(variant: Variant<T>) -> Self {
        Self { variant }
    }

    /// The storage strategy in use.
    pub fn kind(&self) -> ListKind {
        match &self.variant {
            Variant::TwoSlot(_) => ListKind::TwoSlot,
            Variant::Array(_) => ListKind::Array,
        }
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<T> {
        dispatch!(&mut self.variant, list => list.pop())
    }

    /// Keep only the elements for which `keep` returns `true`.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) -> bool {
        dispatch!(&mut self.variant, list => list.retain(keep))
    }

    /// Move the elements into a `Vec` without copying them.
    pub fn into_vec(self) -> Vec<T> {
        dispatch!(self.variant, list => list.into_vec())
    }

    pub(crate) fn notifier(&self) -> &Notifier {
        dispatch!(&self.variant, list => list.notifier())
    }

    pub(crate) fn notifier_mut(&mut self) -> &mut Notifier {
        dispatch!(&mut self.variant, list => list.notifier_mut())
    }

    pub(crate) fn raw_iter(&self) -> Iter<'_, T> {
        dispatch!(&self.variant, list => list.raw_iter())
    }
}

impl<T> From<Vec<T>> for AnyList<T> {
    fn from(values: Vec<T>) -> Self {
        Self::wrap(Variant::TwoSlot(TwoSlotList::from(values)))
    }
}

impl<T> From<TwoSlotList<T>> for AnyList<T> {
    fn from(list: TwoSlotList<T>) -> Self {
        Self::wrap(Variant::TwoSlot(list))
    }
}

impl<T> From<ArrayList<T>> for AnyList<T> {
    fn from(list: ArrayList<T>) -> Self {
        Self::wrap(Variant::Array(list))
    }
}

impl<T> Sequence<T> for AnyList<T> {
    fn len(&self) -> usize {
        dispatch!(&self.variant, list => list.len())
    }

    fn capacity(&self) -> usize {
        dispatch!(&self.variant, list => list.capacity())
    }

    fn mode(&self) -> Mode {
        dispatch!(&self.variant, list => list.mode())
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        dispatch!(&self.variant, list => list.get(index))
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        dispatch!(&mut self.variant, list => list.get_mut(index))
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        dispatch!(&mut self.variant, list => list.set(index, value))
    }

    fn push(&mut self, value: T) -> Result<(), ListError> {
        dispatch!(&mut self.variant, list => list.push(value))
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        dispatch!(&mut self.variant, list => list.insert(index, value))
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        dispatch!(&mut self.variant, list => list.remove(index))
    }

    fn remove_item(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        dispatch!(&mut self.variant, list => list.remove_item(value))
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        dispatch!(&self.variant, list => list.index_of(value))
    }

    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        dispatch!(&self.variant, list => list.last_index_of(value))
    }

    fn clear(&mut self) {
        dispatch!(&mut self.variant, list => list.clear())
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        dispatch!(&self.variant, list => list.to_vec())
    }

    fn contains_all(&self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        dispatch!(&self.variant, list => list.contains_all(other))
    }

    fn remove_all(&mut self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        dispatch!(&mut self.variant, list => list.remove_all(other))
    }

    fn retain_all(&mut self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        dispatch!(&mut self.variant, list => list.retain_all(other))
    }

    fn ensure_capacity(&mut self, min_capacity: usize) -> Result<(), ListError> {
        dispatch!(&mut self.variant, list => list.ensure_capacity(min_capacity))
    }

    fn trim_to_size(&mut self) {
        dispatch!(&mut self.variant, list => list.trim_to_size())
    }
}

list_surface!(AnyList);

macro_rules! cross_eq {
    ($left:ident, $right:ident) => {
        impl<T: PartialEq> PartialEq<$right<T>> for $left<T> {
            fn eq(&self, other: &$right<T>) -> bool {
                self.raw_iter().eq(other.raw_iter())
            }
        }
    };
}

cross_eq!(TwoSlotList, ArrayList);
cross_eq!(ArrayList, TwoSlotList);
cross_eq!(AnyList, TwoSlotList);
cross_eq!(TwoSlotList, AnyList);
cross_eq!(AnyList, ArrayList);
cross_eq!(ArrayList, AnyList);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_selects_variant() {
        assert_eq!(AnyList::<u8>::new().kind(), ListKind::TwoSlot);
        assert_eq!(AnyList::<u8>::of_kind(ListKind::Array).kind(), ListKind::Array);
    }

    #[test]
    fn variants_diverge_only_in_mode() {
        let mut two: AnyList<i32> = AnyList::of_kind(ListKind::TwoSlot);
        let mut array: AnyList<i32> = AnyList::of_kind(ListKind::Array);
        for v in 0..3 {
            two.push(v).unwrap();
            array.push(v).unwrap();
        }
        two.remove(0).unwrap();
        array.remove(0).unwrap();
        assert_eq!(two, array);
        assert_eq!(two.mode(), Mode::Inline2);
        assert_eq!(array.mode(), Mode::Dynamic);
    }

    #[test]
    fn cross_variant_equality() {
        let two: TwoSlotList<u8> = vec![1, 2, 3].into();
        let array: ArrayList<u8> = vec![1, 2, 3].into();
        assert!(two == array);
        assert!(array == two);
        let any = AnyList::from(array.clone());
        assert!(any == two);
        assert!(two == any);
    }

    #[test]
    fn with_config_forwards_errors() {
        let config = ListConfig {
            initial_capacity: 0,
            max_capacity: 1,
        };
        assert!(AnyList::<u8>::with_config(ListKind::Array, config).is_err());
    }

    #[test]
    fn display_kind() {
        assert_eq!(ListKind::TwoSlot.to_string(), "two-slot");
        assert_eq!(ListKind::Array.to_string(), "array");
    }
}
