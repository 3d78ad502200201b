#![forbid(unsafe_code)]

//! Integer value constrained to a closed range.
//!
//! # Invariants
//!
//! 1. `bounds.min <= value <= bounds.max` after construction and after every
//!    mutation, whichever entry point was used.
//! 2. The reject path ([`BoundedValue::try_set`]) leaves the value untouched
//!    on failure.
//! 3. [`Resettable::reset`] always lands on `bounds.min`.

use tether_core::error::BindError;

/// Entity with exactly one reset operation.
pub trait Resettable {
    /// Return to the initial state.
    fn reset(&mut self);
}

/// How a candidate outside the bounds is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetPolicy {
    /// Pull the candidate into range (drag, reset, focus loss).
    Clamp,
    /// Refuse the candidate with [`BindError::OutOfRange`] (direct entry).
    Reject,
}

/// Closed integer range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    min: i64,
    max: i64,
}

impl Bounds {
    /// Create a range.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[must_use]
    pub fn new(min: i64, max: i64) -> Self {
        assert!(min <= max, "invalid bounds: min {min} > max {max}");
        Self { min, max }
    }

    /// Lower bound (inclusive).
    #[inline]
    #[must_use]
    pub const fn min(self) -> i64 {
        self.min
    }

    /// Upper bound (inclusive).
    #[inline]
    #[must_use]
    pub const fn max(self) -> i64 {
        self.max
    }

    /// Whether `value` lies in the range.
    #[inline]
    #[must_use]
    pub fn contains(self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Nearest in-range value.
    #[inline]
    #[must_use]
    pub fn clamp(self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    /// Check `value` against the range without modifying anything.
    pub fn check(self, value: i64) -> Result<i64, BindError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(BindError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// An integer that always satisfies its [`Bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedValue {
    value: i64,
    bounds: Bounds,
}

impl BoundedValue {
    /// Create a value; an out-of-range `initial` is clamped.
    #[must_use]
    pub fn new(initial: i64, bounds: Bounds) -> Self {
        Self {
            value: bounds.clamp(initial),
            bounds,
        }
    }

    /// Current value.
    #[inline]
    #[must_use]
    pub fn get(&self) -> i64 {
        self.value
    }

    /// The fixed bounds.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Store `candidate` pulled into range. Returns whether the value changed.
    pub fn set_clamped(&mut self, candidate: i64) -> bool {
        let next = self.bounds.clamp(candidate);
        let changed = next != self.value;
        self.value = next;
        changed
    }

    /// Store `candidate` only if in range. Returns whether the value changed.
    pub fn try_set(&mut self, candidate: i64) -> Result<bool, BindError> {
        let next = self.bounds.check(candidate)?;
        let changed = next != self.value;
        self.value = next;
        Ok(changed)
    }

    /// Store `candidate` under `policy`. Returns whether the value changed.
    pub fn set(&mut self, candidate: i64, policy: SetPolicy) -> Result<bool, BindError> {
        match policy {
            SetPolicy::Clamp => Ok(self.set_clamped(candidate)),
            SetPolicy::Reject => self.try_set(candidate),
        }
    }
}

impl Resettable for BoundedValue {
    fn reset(&mut self) {
        self.value = self.bounds.min;
    }
}
