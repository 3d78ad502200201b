#![forbid(unsafe_code)]

//! Raw input events emitted by widgets.
//!
//! An [`InputEvent`] pairs the emitting widget with an [`InputKind`]. The
//! payload-free [`EventKind`] is the second half of a dispatch key, so a
//! handler is bound once per `(WidgetId, EventKind)` and sees every payload.
//!
//! # Invariants
//!
//! 1. `InputKind::kind()` is total: every payload maps to exactly one kind.
//! 2. Refreshing a widget from the model never produces an `InputEvent`;
//!    only user interaction does.

use crate::id::WidgetId;

/// Discriminant of an [`InputKind`], used as a dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// Slider thumb moved.
    Dragged,
    /// Enter pressed in a text field.
    TextCommitted,
    /// Text field lost focus.
    FocusLost,
    /// Button pressed.
    Activated,
    /// List column header clicked.
    ColumnClicked,
    /// List row selected.
    RowSelected,
    /// Label edit started on a list row.
    EditStarted,
}

/// Input payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// Slider moved to a new value.
    Dragged(i64),
    /// Text committed with Enter.
    TextCommitted(String),
    /// Focus left a text field holding this text.
    FocusLost(String),
    /// Parameterless trigger.
    Activated,
    /// Header of the given column index was clicked.
    ColumnClicked(usize),
    /// Row at the given display position was selected.
    RowSelected(usize),
    /// Label edit began on the given display position.
    EditStarted(usize),
}

impl InputKind {
    /// The dispatch discriminant for this payload.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Dragged(_) => EventKind::Dragged,
            Self::TextCommitted(_) => EventKind::TextCommitted,
            Self::FocusLost(_) => EventKind::FocusLost,
            Self::Activated => EventKind::Activated,
            Self::ColumnClicked(_) => EventKind::ColumnClicked,
            Self::RowSelected(_) => EventKind::RowSelected,
            Self::EditStarted(_) => EventKind::EditStarted,
        }
    }
}

/// An input event from a specific widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    /// The emitting widget.
    pub source: WidgetId,
    /// What happened.
    pub kind: InputKind,
}

impl InputEvent {
    /// Create an event.
    #[must_use]
    pub fn new(source: WidgetId, kind: InputKind) -> Self {
        Self { source, kind }
    }

    /// `Dragged(value)` from `source`.
    #[must_use]
    pub fn dragged(source: WidgetId, value: i64) -> Self {
        Self::new(source, InputKind::Dragged(value))
    }

    /// `TextCommitted(text)` from `source`.
    #[must_use]
    pub fn text_committed(source: WidgetId, text: impl Into<String>) -> Self {
        Self::new(source, InputKind::TextCommitted(text.into()))
    }

    /// `FocusLost(text)` from `source`.
    #[must_use]
    pub fn focus_lost(source: WidgetId, text: impl Into<String>) -> Self {
        Self::new(source, InputKind::FocusLost(text.into()))
    }

    /// `Activated` from `source`.
    #[must_use]
    pub fn activated(source: WidgetId) -> Self {
        Self::new(source, InputKind::Activated)
    }

    /// `ColumnClicked(column)` from `source`.
    #[must_use]
    pub fn column_clicked(source: WidgetId, column: usize) -> Self {
        Self::new(source, InputKind::ColumnClicked(column))
    }

    /// `RowSelected(row)` from `source`.
    #[must_use]
    pub fn row_selected(source: WidgetId, row: usize) -> Self {
        Self::new(source, InputKind::RowSelected(row))
    }

    /// `EditStarted(row)` from `source`.
    #[must_use]
    pub fn edit_started(source: WidgetId, row: usize) -> Self {
        Self::new(source, InputKind::EditStarted(row))
    }

    /// The dispatch key for this event.
    #[must_use]
    pub fn key(&self) -> (WidgetId, EventKind) {
        (self.source, self.kind.kind())
    }
}
