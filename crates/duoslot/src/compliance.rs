//! Sequence trait compliance test helpers.
//!
//! These functions check that a [`Sequence`] implementation honours the
//! contract: bounds checks before mutation, order preservation, the
//! storage-mode invariant, and the bulk compaction rules. Each helper
//! takes a factory so it can start from a fresh, empty list. Reused by
//! the tests of every variant; each helper panics on the first violation.

use duoslot_core::{IndexBound, ListError, Mode, Sequence};

/// Assert the storage-mode invariant on the current state.
///
/// Inline modes hold at most two elements, the mode matches the length,
/// and capacity covers the length.
pub fn assert_mode_invariant<T, S: Sequence<T>>(list: &S) {
    let len = list.len();
    let mode = list.mode();
    assert!(
        list.capacity() >= len,
        "capacity {} below len {len}",
        list.capacity()
    );
    if mode.is_inline() {
        assert_eq!(
            Some(mode),
            Mode::inline_for(len),
            "mode {mode} does not match len {len}"
        );
    }
}

/// Assert that a fresh list is empty.
pub fn assert_starts_empty<S: Sequence<u32>>(make: impl Fn() -> S) {
    let list = make();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.mode(), Mode::Empty);
    assert_eq!(list.to_vec(), Vec::<u32>::new());
}

/// Assert that pushes are read back in order across every mode change.
pub fn assert_push_preserves_order<S: Sequence<u32>>(make: impl Fn() -> S) {
    let mut list = make();
    for v in 0..40 {
        list.push(v).expect("push within default limits");
        assert_mode_invariant(&list);
    }
    for v in 0..40u32 {
        assert_eq!(list.get(v as usize), Ok(&v));
    }
    assert_eq!(list.to_vec(), (0..40).collect::<Vec<_>>());
}

/// Assert that bad indices are rejected and leave the list unchanged.
pub fn assert_bounds_checked<S: Sequence<u32>>(make: impl Fn() -> S) {
    for len in 0..5u32 {
        let mut list = make();
        for v in 0..len {
            list.push(v).expect("push within default limits");
        }
        let before = list.to_vec();
        let mode = list.mode();
        let n = len as usize;

        assert_eq!(list.get(n), Err(ListError::access(n, n)));
        assert_eq!(list.get(usize::MAX), Err(ListError::access(usize::MAX, n)));
        assert_eq!(list.set(n, 99), Err(ListError::access(n, n)));
        assert_eq!(list.remove(n), Err(ListError::access(n, n)));
        assert_eq!(
            list.insert(n + 1, 99),
            Err(ListError::IndexOutOfRange {
                index: n + 1,
                len: n,
                bound: IndexBound::Insert,
            })
        );

        assert_eq!(list.to_vec(), before, "failed op changed contents");
        assert_eq!(list.mode(), mode, "failed op changed mode");
    }
}

/// Assert that positional inserts and removes match a `Vec`.
pub fn assert_positional_ops_match_vec<S: Sequence<u32>>(make: impl Fn() -> S) {
    let mut list = make();
    let mut model = Vec::new();
    let script: [(bool, usize); 14] = [
        (true, 0),
        (true, 0),
        (true, 1),
        (true, 3),
        (true, 2),
        (false, 0),
        (true, 4),
        (false, 2),
        (false, 3),
        (false, 0),
        (true, 1),
        (false, 1),
        (false, 0),
        (false, 0),
    ];
    for (step, (is_insert, index)) in script.into_iter().enumerate() {
        let value = step as u32;
        if is_insert {
            list.insert(index, value).expect("scripted insert in range");
            model.insert(index, value);
        } else {
            let removed = list.remove(index).expect("scripted remove in range");
            assert_eq!(removed, model.remove(index));
        }
        assert_eq!(list.to_vec(), model, "diverged at step {step}");
        assert_mode_invariant(&list);
    }
}

/// Assert search and by-value removal semantics.
pub fn assert_search_semantics<S: Sequence<u32>>(make: impl Fn() -> S) {
    let mut list = make();
    for v in [5, 6, 5, 7, 5] {
        list.push(v).expect("push within default limits");
    }
    assert_eq!(list.index_of(&5), Some(0));
    assert_eq!(list.last_index_of(&5), Some(4));
    assert_eq!(list.index_of(&8), None);
    assert!(list.contains(&7));
    assert!(list.contains_all(&[7, 6]));
    assert!(!list.contains_all(&[7, 8]));

    assert!(list.remove_item(&5));
    assert_eq!(list.to_vec(), vec![6, 5, 7, 5]);
    assert!(!list.remove_item(&8));
    assert_mode_invariant(&list);
}

/// Assert that `clear` is idempotent and returns the list to `Empty`.
pub fn assert_clear_idempotent<S: Sequence<u32>>(make: impl Fn() -> S) {
    let mut list = make();
    for v in 0..10 {
        list.push(v).expect("push within default limits");
    }
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.mode(), Mode::Empty);
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.mode(), Mode::Empty);
    list.push(1).expect("push after clear");
    assert_eq!(list.to_vec(), vec![1]);
}

/// Assert the in-place compaction of `retain_all` and `remove_all`.
pub fn assert_bulk_compaction<S: Sequence<u32>>(make: impl Fn() -> S) {
    let mut list = make();
    for v in [1, 9, 2, 9, 3] {
        list.push(v).expect("push within default limits");
    }
    assert!(list.retain_all(&[9]));
    assert_eq!(list.to_vec(), vec![9, 9]);
    assert!(!list.retain_all(&[9]));
    assert_mode_invariant(&list);

    let mut list = make();
    for v in [1, 2, 3, 4, 5, 6] {
        list.push(v).expect("push within default limits");
    }
    assert!(list.remove_all(&[2, 4, 6]));
    assert_eq!(list.to_vec(), vec![1, 3, 5]);
    assert!(!list.remove_all(&[7]));
    assert!(list.remove_all(&[1, 3, 5]));
    assert!(list.is_empty());
    assert_mode_invariant(&list);
}

/// Assert that `set` replaces in place and returns the old value.
pub fn assert_set_replaces<S: Sequence<u32>>(make: impl Fn() -> S) {
    let mut list = make();
    for v in 0..4 {
        list.push(v).expect("push within default limits");
        let last = list.len() - 1;
        assert_eq!(list.set(last, v + 100), Ok(v));
    }
    assert_eq!(list.to_vec(), vec![100, 101, 102, 103]);
}

/// Assert that `ensure_capacity` and `trim_to_size` never lose elements
/// and that explicit pre-sizing is honoured once the list uses a buffer.
pub fn assert_capacity_controls<S: Sequence<u32>>(make: impl Fn() -> S) {
    let mut list = make();
    for v in 0..5 {
        list.push(v).expect("push within default limits");
    }
    list.ensure_capacity(64).expect("reserve within default limits");
    assert!(list.capacity() >= 64);
    assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
    list.trim_to_size();
    assert_eq!(list.capacity(), 5);
    assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
    assert_mode_invariant(&list);
}

/// Run every compliance check against lists built by `make`.
pub fn run_full_compliance<S: Sequence<u32>>(make: impl Fn() -> S) {
    assert_starts_empty(&make);
    assert_push_preserves_order(&make);
    assert_bounds_checked(&make);
    assert_positional_ops_match_vec(&make);
    assert_search_semantics(&make);
    assert_clear_idempotent(&make);
    assert_bulk_compaction(&make);
    assert_set_replaces(&make);
    assert_capacity_controls(&make);
}
