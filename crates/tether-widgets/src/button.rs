#![forbid(unsafe_code)]

//! Push button.

use tether_core::event::InputEvent;
use tether_core::id::WidgetId;
use tracing::trace;

use crate::Surface;

/// A labelled trigger control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    id: WidgetId,
    label: String,
}

impl Button {
    /// Create a button.
    pub fn new(id: WidgetId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// The caption.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Click.
    pub fn press(&self) -> InputEvent {
        trace!(id = %self.id, label = %self.label, "button pressed");
        InputEvent::activated(self.id)
    }
}

impl Surface for Button {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn render(&self) -> String {
        format!("[ {} ]", self.label)
    }
}
