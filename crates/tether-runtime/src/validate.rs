#![forbid(unsafe_code)]

//! Integer entry validation.
//!
//! [`IntegerValidator`] turns text from an entry field into a value for a
//! given [`Bounds`]. It has two modes matching the two ways a text field
//! hands over its contents:
//!
//! | Entry point | Method | Out-of-range text |
//! |-------------|--------|-------------------|
//! | Enter pressed | [`IntegerValidator::validate`] | `BindError::OutOfRange` |
//! | Focus lost | [`IntegerValidator::coerce`] | clamped into range |
//!
//! Malformed text fails with `BindError::Validation` in both modes.

use std::num::IntErrorKind;

use tether_core::error::{BindError, ValidationReason};

use crate::reactive::Bounds;

/// Parse an integer, ignoring surrounding whitespace.
pub fn parse_integer(text: &str) -> Result<i64, BindError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(BindError::validation(text, ValidationReason::Empty));
    }
    trimmed.parse::<i64>().map_err(|err| {
        let reason = match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValidationReason::Overflow,
            _ => ValidationReason::NotANumber,
        };
        BindError::validation(text, reason)
    })
}

/// Validator for integer entry against fixed bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerValidator {
    bounds: Bounds,
}

impl IntegerValidator {
    /// Create a validator for `bounds`.
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// The bounds checked against.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Strict mode: parse and require the value to be in range.
    pub fn validate(&self, text: &str) -> Result<i64, BindError> {
        self.bounds.check(parse_integer(text)?)
    }

    /// Lenient mode: parse and clamp into range.
    pub fn coerce(&self, text: &str) -> Result<i64, BindError> {
        parse_integer(text).map(|v| self.bounds.clamp(v))
    }
}
