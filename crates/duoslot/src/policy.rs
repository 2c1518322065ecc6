//! Mode and capacity decisions.
//!
//! [`CapacityPolicy`] answers three questions for the list variants:
//! what capacity to allocate when leaving inline storage, what capacity
//! to grow a full buffer to, and whether a shrunken list returns to
//! inline storage. It never touches elements.
//!
//! Growth doubles: `new = max(current * 2, required)`, capped at the
//! effective maximum. Promotion allocates exactly what the pending
//! insert needs (raised to the configured initial capacity, if any).

use duoslot_core::{ListConfig, ListError};

use crate::cell::INLINE_CAPACITY;

/// Sizing rules for one list instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityPolicy {
    /// Effective capacity limit for the element type.
    max: usize,
    /// Lowest capacity granted at promotion time.
    promote_min: usize,
    /// Configured floor that `promote_min` returns to.
    initial: usize,
}

impl CapacityPolicy {
    /// Build the policy for elements of type `T` from a validated config.
    pub fn for_type<T>(config: &ListConfig) -> Self {
        Self {
            max: config.max_capacity_for::<T>(),
            promote_min: config.initial_capacity,
            initial: config.initial_capacity,
        }
    }

    /// Effective capacity limit.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Lowest capacity granted when leaving inline storage.
    pub fn promote_min(&self) -> usize {
        self.promote_min
    }

    /// Raise the promotion floor, for capacity requests made while inline.
    pub fn raise_promote_min(&mut self, min_capacity: usize) -> Result<(), ListError> {
        self.check(min_capacity)?;
        self.promote_min = self.promote_min.max(min_capacity);
        Ok(())
    }

    /// Drop a raised promotion floor back to the configured initial capacity.
    pub fn reset_promote_min(&mut self) {
        self.promote_min = self.initial;
    }

    /// Fail with `CapacityExceeded` if `required` is above the limit.
    pub fn check(&self, required: usize) -> Result<(), ListError> {
        if required > self.max {
            return Err(ListError::CapacityExceeded {
                requested: required,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Capacity to allocate when inline storage must hold `required` elements.
    pub fn promotion_capacity(&self, required: usize) -> Result<usize, ListError> {
        self.check(required)?;
        Ok(required.max(self.promote_min).min(self.max))
    }

    /// Capacity to grow a buffer of `current` capacity to so that it holds
    /// at least `required` elements.
    pub fn grow_target(&self, current: usize, required: usize) -> Result<usize, ListError> {
        self.check(required)?;
        Ok(current.saturating_mul(2).max(required).min(self.max))
    }

    /// Whether a buffer holding `len` elements returns to inline storage.
    pub fn should_demote(&self, len: usize) -> bool {
        len <= INLINE_CAPACITY
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self {
            max: ListConfig::DEFAULT_MAX_CAPACITY,
            promote_min: ListConfig::DEFAULT_INITIAL_CAPACITY,
            initial: ListConfig::DEFAULT_INITIAL_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(max: usize) -> CapacityPolicy {
        CapacityPolicy::for_type::<u32>(&ListConfig {
            initial_capacity: 0,
            max_capacity: max,
        })
    }

    #[test]
    fn promotion_is_exact() {
        assert_eq!(policy(100).promotion_capacity(3), Ok(3));
    }

    #[test]
    fn promotion_honours_initial_capacity() {
        let p = CapacityPolicy::for_type::<u32>(&ListConfig::with_initial_capacity(16));
        assert_eq!(p.promotion_capacity(3), Ok(16));
    }

    #[test]
    fn growth_doubles() {
        let p = policy(100);
        assert_eq!(p.grow_target(3, 4), Ok(6));
        assert_eq!(p.grow_target(6, 7), Ok(12));
    }

    #[test]
    fn growth_jumps_to_required_when_larger() {
        assert_eq!(policy(100).grow_target(4, 20), Ok(20));
    }

    #[test]
    fn growth_capped_at_max() {
        assert_eq!(policy(10).grow_target(8, 9), Ok(10));
    }

    #[test]
    fn growth_beyond_max_fails() {
        assert_eq!(
            policy(10).grow_target(10, 11),
            Err(ListError::CapacityExceeded {
                requested: 11,
                max: 10
            })
        );
    }

    #[test]
    fn demotes_at_two_or_fewer() {
        let p = policy(100);
        assert!(p.should_demote(2));
        assert!(p.should_demote(0));
        assert!(!p.should_demote(3));
    }

    #[test]
    fn raise_promote_min_keeps_largest() {
        let mut p = policy(100);
        p.raise_promote_min(8).unwrap();
        p.raise_promote_min(5).unwrap();
        assert_eq!(p.promote_min(), 8);
        assert!(p.raise_promote_min(101).is_err());
    }

    #[test]
    fn reset_promote_min_returns_to_configured_floor() {
        let mut p = CapacityPolicy::for_type::<u32>(&ListConfig::with_initial_capacity(4));
        p.raise_promote_min(50).unwrap();
        p.reset_promote_min();
        assert_eq!(p.promote_min(), 4);
        assert_eq!(p.promotion_capacity(3), Ok(4));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn grow_target_covers_required_and_never_shrinks(
                current in 0usize..1000,
                extra in 1usize..1000,
            ) {
                let p = policy(10_000);
                let required = current + extra;
                let target = p.grow_target(current, required).unwrap();
                prop_assert!(target >= required);
                prop_assert!(target >= current);
                prop_assert!(target <= 10_000);
            }
        }
    }
}
