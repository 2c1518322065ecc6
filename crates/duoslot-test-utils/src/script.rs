//! Scripted operations for differential testing.

use proptest::prelude::*;

use duoslot_core::{ListError, Sequence};

/// One operation of the [`Sequence`] contract with its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op<T> {
    Push(T),
    Insert(usize, T),
    Remove(usize),
    RemoveItem(T),
    Get(usize),
    Set(usize, T),
    IndexOf(T),
    LastIndexOf(T),
    Contains(T),
    ContainsAll(Vec<T>),
    RemoveAll(Vec<T>),
    RetainAll(Vec<T>),
    Clear,
    EnsureCapacity(usize),
    TrimToSize,
}

/// Observable result of applying an [`Op`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Unit(Result<(), ListError>),
    Value(Result<T, ListError>),
    Index(Option<usize>),
    Flag(bool),
}

/// Apply `op` to `list` and capture what it returned.
pub fn apply<T, S>(list: &mut S, op: &Op<T>) -> Outcome<T>
where
    T: Clone + PartialEq,
    S: Sequence<T> + ?Sized,
{
    match op {
        Op::Push(v) => Outcome::Unit(list.push(v.clone())),
        Op::Insert(i, v) => Outcome::Unit(list.insert(*i, v.clone())),
        Op::Remove(i) => Outcome::Value(list.remove(*i)),
        Op::RemoveItem(v) => Outcome::Flag(list.remove_item(v)),
        Op::Get(i) => Outcome::Value(list.get(*i).cloned()),
        Op::Set(i, v) => Outcome::Value(list.set(*i, v.clone())),
        Op::IndexOf(v) => Outcome::Index(list.index_of(v)),
        Op::LastIndexOf(v) => Outcome::Index(list.last_index_of(v)),
        Op::Contains(v) => Outcome::Flag(list.contains(v)),
        Op::ContainsAll(vs) => Outcome::Flag(list.contains_all(vs)),
        Op::RemoveAll(vs) => Outcome::Flag(list.remove_all(vs)),
        Op::RetainAll(vs) => Outcome::Flag(list.retain_all(vs)),
        Op::Clear => {
            list.clear();
            Outcome::Unit(Ok(()))
        }
        Op::EnsureCapacity(n) => Outcome::Unit(list.ensure_capacity(*n)),
        Op::TrimToSize => {
            list.trim_to_size();
            Outcome::Unit(Ok(()))
        }
    }
}

/// Strategy for a single operation over `u8` values drawn from a small
/// alphabet, so searches and bulk passes hit existing elements often.
///
/// Indices run a little past the lengths the scripts usually reach, so
/// out-of-range errors are exercised too.
pub fn op() -> impl Strategy<Value = Op<u8>> {
    let value = 0u8..6;
    let index = 0usize..10;
    let set = || prop::collection::vec(0u8..6, 0..4);
    prop_oneof![
        4 => value.clone().prop_map(Op::Push),
        3 => (index.clone(), value.clone()).prop_map(|(i, v)| Op::Insert(i, v)),
        3 => index.clone().prop_map(Op::Remove),
        1 => value.clone().prop_map(Op::RemoveItem),
        1 => index.clone().prop_map(Op::Get),
        1 => (index, value.clone()).prop_map(|(i, v)| Op::Set(i, v)),
        1 => value.clone().prop_map(Op::IndexOf),
        1 => value.clone().prop_map(Op::LastIndexOf),
        1 => value.prop_map(Op::Contains),
        1 => set().prop_map(Op::ContainsAll),
        1 => set().prop_map(Op::RemoveAll),
        1 => set().prop_map(Op::RetainAll),
        1 => Just(Op::Clear),
        1 => (0usize..40).prop_map(Op::EnsureCapacity),
        1 => Just(Op::TrimToSize),
    ]
}

/// Strategy for a script of up to `max_len` operations.
pub fn ops(max_len: usize) -> impl Strategy<Value = Vec<Op<u8>>> {
    prop::collection::vec(op(), 0..max_len)
}
