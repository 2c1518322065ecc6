//! Observer notifications seen from outside the crate.

use std::sync::Arc;

use duoslot::{AnyList, ArrayList, ListKind, OpKind, Sequence, TwoSlotList};
use duoslot_stats::{stats_channel, OpCounter};
use duoslot_test_utils::RecordingObserver;

#[test]
fn promotion_and_demotion_are_reported() {
    let rec = Arc::new(RecordingObserver::new());
    let mut list = TwoSlotList::new().with_observer(rec.clone());

    list.push(1u16).unwrap();
    list.push(2).unwrap();
    list.push(3).unwrap();
    list.remove(2).unwrap();

    assert_eq!(
        rec.events(),
        vec![
            (OpKind::Insert, Some("u16")),
            (OpKind::Insert, Some("u16")),
            (OpKind::Grow, None),
            (OpKind::Insert, Some("u16")),
            (OpKind::Shrink, None),
            (OpKind::Remove, None),
        ]
    );
}

#[test]
fn reads_searches_and_clear() {
    let rec = Arc::new(RecordingObserver::new());
    let mut list: TwoSlotList<u8> = vec![1, 2, 3].into();
    list.attach_observer(rec.clone());

    list.get(0).unwrap();
    list.set(1, 9).unwrap();
    assert!(list.contains(&3));
    list.iter().count();
    list.clear();

    assert_eq!(
        rec.kinds(),
        vec![
            OpKind::Get,
            OpKind::Set,
            OpKind::Search,
            OpKind::Iterate,
            OpKind::Clear,
        ]
    );
}

#[test]
fn bulk_pass_reports_one_search_and_each_removal() {
    let rec = Arc::new(RecordingObserver::new());
    let mut list: ArrayList<char> = "abcabc".chars().collect();
    list.attach_observer(rec.clone());

    assert!(list.remove_all(&['a', 'b']));
    assert_eq!(rec.count(OpKind::Search), 1);
    assert_eq!(rec.count(OpKind::Remove), 4);
}

#[test]
fn failed_operations_are_not_reported() {
    let rec = Arc::new(RecordingObserver::new());
    let mut list = TwoSlotList::<u8>::new().with_observer(rec.clone());
    assert!(list.insert(1, 0).is_err());
    assert!(list.remove(0).is_err());
    assert!(list.set(0, 0).is_err());
    assert!(list.get(0).is_err());
    assert!(list.get_mut(5).is_err());
    assert!(rec.events().is_empty());

    let mut array = ArrayList::<u8>::new().with_observer(rec.clone());
    assert!(array.get(0).is_err());
    assert!(array.get_mut(5).is_err());
    assert!(rec.events().is_empty());
}

#[test]
fn detach_stops_notifications() {
    let rec = Arc::new(RecordingObserver::new());
    let mut list = TwoSlotList::new();
    assert!(!list.has_observer());
    list.attach_observer(rec.clone());
    list.push('x').unwrap();
    assert!(list.detach_observer().is_some());
    assert!(!list.has_observer());
    list.push('y').unwrap();
    assert_eq!(rec.count(OpKind::Insert), 1);
}

#[test]
fn attach_returns_previous_observer() {
    let first = Arc::new(RecordingObserver::new());
    let second = Arc::new(RecordingObserver::new());
    let mut list = ArrayList::<u8>::new();
    assert!(list.attach_observer(first.clone()).is_none());
    assert!(list.attach_observer(second.clone()).is_some());
    list.push(1).unwrap();
    assert!(first.events().is_empty());
    assert_eq!(second.count(OpKind::Insert), 1);
}

#[test]
fn any_list_forwards_to_inner_observer() {
    let rec = Arc::new(RecordingObserver::new());
    let mut list = AnyList::of_kind(ListKind::Array).with_observer(rec.clone());
    list.push(5i64).unwrap();
    list.pop();
    assert_eq!(
        rec.events(),
        vec![
            (OpKind::Grow, None),
            (OpKind::Insert, Some("i64")),
            (OpKind::Remove, None),
        ]
    );
}

#[test]
fn clones_share_the_observer() {
    let counter = Arc::new(OpCounter::new());
    let list = TwoSlotList::new().with_observer(counter.clone());
    let mut copy = list.clone();
    copy.push(1u8).unwrap();
    assert_eq!(counter.count(OpKind::Insert), 1);
}

#[test]
fn cursor_steps_are_reads() {
    let rec = Arc::new(RecordingObserver::new());
    let mut list: TwoSlotList<u8> = vec![1, 2, 3].into();
    list.attach_observer(rec.clone());
    {
        let mut cursor = list.cursor();
        cursor.next().unwrap();
        cursor.remove().unwrap();
    }
    assert_eq!(
        rec.kinds(),
        vec![OpKind::Iterate, OpKind::Get, OpKind::Shrink, OpKind::Remove]
    );
}

#[test]
fn channel_collector_groups_by_element_type() {
    let (observer, mut collector) = stats_channel(256);
    let observer = Arc::new(observer);

    let mut words = TwoSlotList::new().with_observer(observer.clone());
    let mut numbers = ArrayList::new().with_observer(observer.clone());
    words.push("a").unwrap();
    words.push("b").unwrap();
    numbers.push(1u32).unwrap();

    collector.drain();
    let stats = collector.stats();
    assert_eq!(stats.count_for("&str", OpKind::Insert), 2);
    assert_eq!(stats.count_for("u32", OpKind::Insert), 1);
    assert_eq!(stats.count(OpKind::Insert), 3);
    assert_eq!(observer.dropped(), 0);

    let rows: Vec<_> = stats.rows().filter(|row| row.1 == OpKind::Insert).collect();
    assert_eq!(rows, vec![("&str", OpKind::Insert, 2), ("u32", OpKind::Insert, 1)]);
}
