#![forbid(unsafe_code)]

//! Text canvas drawing a filled triangle in the model's colour.
//!
//! Terminals without truecolor still need to show that the colour changed,
//! so the fill glyph follows the colour's luminance and the hex value is
//! printed under the shape.

use tether_core::color::Rgb;
use tether_core::event::InputEvent;
use tether_core::id::WidgetId;
use tracing::{debug, trace};

use crate::Surface;

/// Default triangle height in rows.
pub const DEFAULT_ROWS: usize = 4;

/// Fill glyph for a colour: dense for dark colours, sparse for light ones.
#[must_use]
pub fn fill_glyph(colour: Rgb) -> char {
    match colour.luminance_u8() {
        0..=84 => '#',
        85..=169 => '*',
        _ => '.',
    }
}

/// Canvas showing one triangle.
#[derive(Debug, Clone)]
pub struct TriangleCanvas {
    id: WidgetId,
    colour: Rgb,
    rows: usize,
}

impl TriangleCanvas {
    /// Create a canvas.
    #[must_use]
    pub fn new(id: WidgetId, colour: Rgb) -> Self {
        Self {
            id,
            colour,
            rows: DEFAULT_ROWS,
        }
    }

    /// Set the triangle height (at least 1 row).
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows.max(1);
        self
    }

    /// Colour currently drawn.
    #[must_use]
    pub fn colour(&self) -> Rgb {
        self.colour
    }

    /// Mouse button pressed over the canvas.
    pub fn click(&self) -> InputEvent {
        trace!(id = %self.id, "canvas clicked");
        InputEvent::activated(self.id)
    }

    /// Re-read the colour from the model.
    pub fn pull(&mut self, colour: Rgb) {
        if colour != self.colour {
            debug!(id = %self.id, from = %self.colour, to = %colour, "canvas recoloured");
        }
        self.colour = colour;
    }
}

impl Surface for TriangleCanvas {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn render(&self) -> String {
        let glyph = fill_glyph(self.colour);
        let mut lines: Vec<String> = (0..self.rows)
            .map(|row| {
                let indent = " ".repeat(self.rows - 1 - row);
                let fill: String = std::iter::repeat_n(glyph, 2 * row + 1).collect();
                format!("{indent}{fill}")
            })
            .collect();
        lines.push(format!(
            "colour {} (r={} g={} b={})",
            self.colour, self.colour.r, self.colour.g, self.colour.b
        ));
        lines.join("\n")
    }
}
