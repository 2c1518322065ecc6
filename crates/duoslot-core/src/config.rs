//! List configuration parameters.

use crate::error::ListError;

/// Configuration for a list's buffer sizing.
///
/// Validated at construction; the list copies what it needs and the
/// config is not consulted again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListConfig {
    /// Advisory pre-sizing in elements.
    ///
    /// The growable-array variant allocates this eagerly. The two-slot
    /// variant uses it as the minimum buffer capacity when it promotes
    /// out of inline storage (never below the three elements needed).
    /// Default: 0.
    pub initial_capacity: usize,

    /// Upper bound on the buffer capacity in elements.
    ///
    /// Default: `usize::MAX`, which in practice means the platform limit
    /// for the element type (see [`ListConfig::max_capacity_for`]).
    /// Must be at least 3.
    pub max_capacity: usize,
}

impl ListConfig {
    /// Default initial capacity: no pre-sizing.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

    /// Default maximum capacity: bounded only by the platform.
    pub const DEFAULT_MAX_CAPACITY: usize = usize::MAX;

    /// Smallest accepted `max_capacity`. A two-slot list must be able to
    /// hold a third element once it leaves inline storage.
    pub const MIN_MAX_CAPACITY: usize = 3;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }

    /// Create a config that pre-sizes for `initial_capacity` elements.
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::new()
        }
    }

    /// Check the config for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidArgument`] if `max_capacity` is below
    /// [`MIN_MAX_CAPACITY`](Self::MIN_MAX_CAPACITY) or if
    /// `initial_capacity` exceeds `max_capacity`.
    pub fn validate(&self) -> Result<(), ListError> {
        if self.max_capacity < Self::MIN_MAX_CAPACITY {
            return Err(ListError::InvalidArgument {
                reason: format!(
                    "max_capacity must be at least {}, got {}",
                    Self::MIN_MAX_CAPACITY,
                    self.max_capacity
                ),
            });
        }
        if self.initial_capacity > self.max_capacity {
            return Err(ListError::InvalidArgument {
                reason: format!(
                    "initial_capacity {} exceeds max_capacity {}",
                    self.initial_capacity, self.max_capacity
                ),
            });
        }
        Ok(())
    }

    /// Effective capacity limit for elements of type `T`.
    ///
    /// The smaller of `max_capacity` and the largest element count whose
    /// allocation fits in `isize::MAX` bytes.
    pub fn max_capacity_for<T>(&self) -> usize {
        self.max_capacity.min(platform_max::<T>())
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Largest element count a single allocation of `T` can hold.
pub fn platform_max<T>() -> usize {
    match std::mem::size_of::<T>() {
        0 => isize::MAX as usize,
        size => isize::MAX as usize / size,
    }
}
