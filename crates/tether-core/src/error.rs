#![forbid(unsafe_code)]

//! Recoverable errors raised at input handlers and during view refresh.
//!
//! None of these are fatal. A [`BindError`] means an edit was left unapplied
//! and the model is unchanged; a [`PullError`] means one subscriber failed to
//! refresh while the others carried on.

use std::fmt;

use crate::id::WidgetId;

/// Why a piece of text was not accepted as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// Nothing but whitespace.
    Empty,
    /// Not an integer.
    NotANumber,
    /// An integer too large to represent.
    Overflow,
    /// Not a `#rrggbb` colour.
    NotAColour,
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::NotANumber => write!(f, "not a number"),
            Self::Overflow => write!(f, "number too large"),
            Self::NotAColour => write!(f, "not a #rrggbb colour"),
        }
    }
}

/// Errors from setting a bound value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// A direct entry fell outside `[min, max]`.
    OutOfRange { value: i64, min: i64, max: i64 },
    /// The entry could not be parsed.
    Validation {
        input: String,
        reason: ValidationReason,
    },
}

impl BindError {
    /// Shorthand for a validation failure.
    #[must_use]
    pub fn validation(input: impl Into<String>, reason: ValidationReason) -> Self {
        Self::Validation {
            input: input.into(),
            reason,
        }
    }

    /// Short label shown next to a flagged widget.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "out of range",
            Self::Validation { .. } => "invalid",
        }
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { value, min, max } => {
                write!(f, "value {value} is outside [{min}, {max}]")
            }
            Self::Validation { input, reason } => write!(f, "{input:?}: {reason}"),
        }
    }
}

impl std::error::Error for BindError {}

/// A subscriber failed to refresh from the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullError {
    /// The surface that failed.
    pub surface: WidgetId,
    /// What went wrong.
    pub message: String,
}

impl PullError {
    /// Create a pull error for `surface`.
    #[must_use]
    pub fn new(surface: WidgetId, message: impl Into<String>) -> Self {
        Self {
            surface,
            message: message.into(),
        }
    }
}

impl fmt::Display for PullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface {} failed to refresh: {}", self.surface, self.message)
    }
}

impl std::error::Error for PullError {}
