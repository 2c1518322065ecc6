//! Contract compliance for configured lists.

use duoslot::compliance::run_full_compliance;
use duoslot::{AnyList, ListConfig, ListKind, TwoSlotList};

#[test]
fn two_slot_with_promotion_floor() {
    run_full_compliance(|| TwoSlotList::<u32>::with_capacity(8).unwrap());
}

#[test]
fn two_slot_with_generous_cap() {
    let config = ListConfig {
        initial_capacity: 0,
        max_capacity: 1 << 16,
    };
    run_full_compliance(|| TwoSlotList::<u32>::with_config(config).unwrap());
}

#[test]
fn any_list_from_config() {
    let config = ListConfig::new();
    run_full_compliance(|| AnyList::<u32>::with_config(ListKind::TwoSlot, config).unwrap());
    run_full_compliance(|| AnyList::<u32>::with_config(ListKind::Array, config).unwrap());
}
