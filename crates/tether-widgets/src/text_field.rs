#![forbid(unsafe_code)]

//! Single-line editable text entry.
//!
//! Typing only edits the local buffer. The buffer is handed to the model on
//! [`TextField::commit`] (Enter) or [`TextField::blur`] (focus loss). If the
//! model refuses it, the handler calls [`TextField::flag`]; the text stays as
//! typed and the field shows the reason until the next successful
//! [`ValueSurface::pull`].

use tether_core::error::{BindError, PullError};
use tether_core::event::InputEvent;
use tether_core::id::WidgetId;
use tether_runtime::reactive::BoundedValue;
use tracing::trace;

use crate::text::{pad_right, pop_grapheme};
use crate::{Surface, ValueSurface};

/// Default width of the visible entry box in cells.
pub const DEFAULT_FIELD_WIDTH: usize = 12;

/// Editable text field.
#[derive(Debug, Clone)]
pub struct TextField {
    id: WidgetId,
    label: String,
    text: String,
    width: usize,
    flag: Option<BindError>,
}

impl TextField {
    /// Create an empty field.
    pub fn new(id: WidgetId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            text: String::new(),
            width: DEFAULT_FIELD_WIDTH,
            flag: None,
        }
    }

    /// Set the initial contents.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the visible width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Current contents.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the contents without touching the flag.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append typed text.
    pub fn insert_str(&mut self, typed: &str) {
        self.text.push_str(typed);
    }

    /// Delete the last grapheme cluster.
    pub fn backspace(&mut self) {
        pop_grapheme(&mut self.text);
    }

    /// Delete everything.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Enter pressed: hand the contents over as a commit.
    pub fn commit(&self) -> InputEvent {
        trace!(id = %self.id, text = %self.text, "text committed");
        InputEvent::text_committed(self.id, self.text.clone())
    }

    /// Focus left the field: hand the contents over leniently.
    pub fn blur(&self) -> InputEvent {
        trace!(id = %self.id, text = %self.text, "focus lost");
        InputEvent::focus_lost(self.id, self.text.clone())
    }

    /// Mark the current contents as rejected.
    pub fn flag(&mut self, error: BindError) {
        self.flag = Some(error);
    }

    /// Drop any rejection mark.
    pub fn clear_flag(&mut self) {
        self.flag = None;
    }

    /// The rejection currently shown, if any.
    #[must_use]
    pub fn flagged(&self) -> Option<&BindError> {
        self.flag.as_ref()
    }
}

impl Surface for TextField {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn render(&self) -> String {
        let boxed = format!("{}: [{}]", self.label, pad_right(&self.text, self.width));
        match &self.flag {
            Some(err) => format!("{boxed} ! {}: {err}", err.label()),
            None => boxed,
        }
    }
}

impl ValueSurface for TextField {
    fn pull(&mut self, value: &BoundedValue) -> Result<(), PullError> {
        self.text = value.get().to_string();
        self.flag = None;
        Ok(())
    }
}
