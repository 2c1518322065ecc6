//! Behavioural guarantees of the two-slot list, end to end.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use duoslot::{
    ArrayList, IndexBound, ListConfig, ListError, Mode, Sequence, TwoSlotList,
};

fn hash_of<H: Hash>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn third_insert_then_removal_restores_inline2() {
    let mut list = TwoSlotList::new();
    list.push("a").unwrap();
    list.push("b").unwrap();
    list.push("c").unwrap();
    assert_eq!(list.mode(), Mode::Dynamic);
    assert_eq!(list.capacity(), 3);

    assert_eq!(list.remove(2), Ok("c"));
    assert_eq!(list.mode(), Mode::Inline2);
    assert_eq!(list, vec!["a", "b"]);
}

#[test]
fn retain_all_keeps_matches_in_order() {
    let mut list: TwoSlotList<char> = "axbxc".chars().collect();
    assert!(list.retain_all(&['x']));
    assert_eq!(list, vec!['x', 'x']);
    assert_eq!(list.mode(), Mode::Inline2);
}

#[test]
fn second_cursor_remove_is_illegal() {
    let mut list: TwoSlotList<char> = "abc".chars().collect();
    let mut cursor = list.cursor();
    cursor.next().unwrap();
    assert_eq!(cursor.remove(), Ok('a'));
    assert_eq!(
        cursor.remove(),
        Err(ListError::IllegalState { operation: "remove" })
    );
    assert_eq!(cursor.next(), Ok(&'b'));
}

#[test]
fn bounds_on_non_empty_lists() {
    for len in 1..6usize {
        let mut list: TwoSlotList<usize> = (0..len).collect();
        assert_eq!(
            list.get(len),
            Err(ListError::IndexOutOfRange {
                index: len,
                len,
                bound: IndexBound::Access,
            })
        );
        assert!(list.get(usize::MAX).is_err());
        assert_eq!(
            list.insert(len + 1, 0),
            Err(ListError::IndexOutOfRange {
                index: len + 1,
                len,
                bound: IndexBound::Insert,
            })
        );
        assert_eq!(list.len(), len);
    }
}

#[test]
fn to_vec_round_trips() {
    for len in 0..8 {
        let list: TwoSlotList<u32> = (0..len).collect();
        let rebuilt: TwoSlotList<u32> = list.to_vec().into_iter().collect();
        assert_eq!(rebuilt, list);
        assert_eq!(hash_of(&rebuilt), hash_of(&list));
        assert_eq!(rebuilt.mode(), list.mode());
    }
}

#[test]
fn clear_twice_matches_clear_once() {
    let mut once: TwoSlotList<u8> = (0..9).collect();
    let mut twice = once.clone();
    once.clear();
    twice.clear();
    twice.clear();
    assert_eq!(once, twice);
    assert_eq!(twice.mode(), Mode::Empty);
    assert_eq!(twice.len(), 0);
}

#[test]
fn absent_values_are_elements() {
    let mut list: TwoSlotList<Option<&str>> = TwoSlotList::new();
    list.push(None).unwrap();
    list.push(Some("x")).unwrap();
    list.push(None).unwrap();
    assert_eq!(list.mode(), Mode::Dynamic);
    assert_eq!(list.index_of(&None), Some(0));
    assert_eq!(list.last_index_of(&None), Some(2));
    assert!(list.remove_item(&None));
    assert_eq!(list, vec![Some("x"), None]);
    assert_eq!(list.mode(), Mode::Inline2);
}

#[test]
fn equal_contents_hash_alike_across_modes() {
    let mut grown: TwoSlotList<u8> = vec![1, 2, 3, 4].into();
    grown.remove(3).unwrap();
    grown.remove(2).unwrap();
    let direct: TwoSlotList<u8> = vec![1, 2].into();
    assert_eq!(grown, direct);
    assert_eq!(hash_of(&grown), hash_of(&direct));

    let array: ArrayList<u8> = vec![1, 2].into();
    assert!(grown == array);
}

#[test]
fn capacity_cap_refuses_growth_cleanly() {
    let config = ListConfig {
        initial_capacity: 0,
        max_capacity: 3,
    };
    let mut list = TwoSlotList::with_config(config).unwrap();
    list.try_extend([1, 2, 3]).unwrap();
    let err = list.push(4).unwrap_err();
    assert_eq!(err, ListError::CapacityExceeded { requested: 4, max: 3 });
    assert_eq!(list, vec![1, 2, 3]);
    assert_eq!(list.capacity(), 3);
    assert_eq!(err.to_string(), "capacity exceeded: requested 4 elements, max 3");
}

#[test]
fn list_cursor_edits_in_place() {
    let mut list: TwoSlotList<i32> = vec![1, 2, 3].into();
    {
        let mut cursor = list.list_cursor_at(3).unwrap();
        assert_eq!(cursor.previous(), Ok(&3));
        cursor.set(30).unwrap();
        assert_eq!(cursor.previous(), Ok(&2));
        assert_eq!(cursor.remove(), Ok(2));
        assert_eq!(cursor.next_index(), 1);
        cursor.add(20).unwrap();
        assert_eq!(cursor.previous_index(), Some(1));
        assert_eq!(cursor.set(0), Err(ListError::IllegalState { operation: "set" }));
    }
    assert_eq!(list, vec![1, 20, 30]);
}

#[test]
fn extend_and_iterate_both_ways() {
    let mut list = TwoSlotList::new();
    list.extend([1, 2, 3, 4]);
    let forward: Vec<_> = list.iter().copied().collect();
    let backward: Vec<_> = list.iter().rev().copied().collect();
    assert_eq!(forward, vec![1, 2, 3, 4]);
    assert_eq!(backward, vec![4, 3, 2, 1]);
    assert_eq!(list.iter().len(), 4);
    let owned: Vec<_> = list.into_iter().collect();
    assert_eq!(owned, vec![1, 2, 3, 4]);
}
