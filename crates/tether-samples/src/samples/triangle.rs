#![forbid(unsafe_code)]

//! Triangle canvas recoloured through a colour field.
//!
//! The colour field plays the part of a colour dialog: `type` fills it in and
//! "Change Color" applies it. Text that is not a `#rrggbb` colour is flagged
//! on the field and the model keeps its colour.

use tether_core::color::Rgb;
use tether_core::event::EventKind;
use tether_core::id::WidgetIds;
use tether_runtime::dispatch::Bindings;
use tether_runtime::program::{Cmd, Model, Program};
use tether_widgets::{Button, Surface, TextField, TriangleCanvas};

use crate::host::{CommandError, Sample, feed, unknown};

/// Colour the triangle starts with.
pub const INITIAL_COLOUR: Rgb = Rgb::new(255, 128, 51);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriangleMsg {
    PickPressed,
    CanvasClicked,
    /// Redraw the canvas and re-seed the colour field.
    ColourChanged,
}

/// Model for the triangle sample.
#[derive(Debug)]
pub struct TriangleModel {
    colour: Rgb,
    canvas: TriangleCanvas,
    field: TextField,
    pick: Button,
}

impl TriangleModel {
    /// Build the canvas and controls around `colour`.
    #[must_use]
    pub fn new(colour: Rgb) -> Self {
        let mut ids = WidgetIds::new();
        Self {
            colour,
            canvas: TriangleCanvas::new(ids.next_id(), colour),
            field: TextField::new(ids.next_id(), "Colour").with_width(8),
            pick: Button::new(ids.next_id(), "Change Color"),
        }
    }

    /// Dispatch table for this model's widgets.
    #[must_use]
    pub fn bindings(&self) -> Bindings<TriangleMsg> {
        Bindings::new()
            .with(self.pick.id(), EventKind::Activated, |_| {
                Some(TriangleMsg::PickPressed)
            })
            .with(self.canvas.id(), EventKind::Activated, |_| {
                Some(TriangleMsg::CanvasClicked)
            })
    }

    /// The model colour.
    #[must_use]
    pub fn colour(&self) -> Rgb {
        self.colour
    }

    /// The canvas.
    #[must_use]
    pub fn canvas(&self) -> &TriangleCanvas {
        &self.canvas
    }

    /// The colour field.
    #[must_use]
    pub fn field(&self) -> &TextField {
        &self.field
    }
}

impl Model for TriangleModel {
    type Message = TriangleMsg;

    fn init(&mut self) -> Cmd<TriangleMsg> {
        Cmd::post(TriangleMsg::ColourChanged)
    }

    fn update(&mut self, msg: TriangleMsg) -> Cmd<TriangleMsg> {
        match msg {
            TriangleMsg::PickPressed => match Rgb::parse_hex(self.field.text()) {
                Ok(colour) => {
                    self.colour = colour;
                    Cmd::post(TriangleMsg::ColourChanged)
                }
                Err(err) => {
                    let note = format!("colour {}: {err}", err.label());
                    self.field.flag(err);
                    Cmd::log(note)
                }
            },
            TriangleMsg::CanvasClicked => Cmd::log("mouse down on canvas"),
            TriangleMsg::ColourChanged => {
                self.canvas.pull(self.colour);
                self.field.set_text(self.colour.to_string());
                self.field.clear_flag();
                Cmd::none()
            }
        }
    }

    fn view(&self) -> String {
        [
            self.canvas.render(),
            self.field.render(),
            self.pick.render(),
        ]
        .join("\n")
    }
}

/// Runnable triangle sample.
#[derive(Debug)]
pub struct TriangleSample {
    program: Program<TriangleModel>,
}

impl TriangleSample {
    /// Create the sample with [`INITIAL_COLOUR`].
    #[must_use]
    pub fn new() -> Self {
        let model = TriangleModel::new(INITIAL_COLOUR);
        let bindings = model.bindings();
        let mut program = Program::new(model, bindings);
        feed(&mut program, None);
        Self { program }
    }

    /// The model.
    #[must_use]
    pub fn model(&self) -> &TriangleModel {
        self.program.model()
    }
}

impl Default for TriangleSample {
    fn default() -> Self {
        Self::new()
    }
}

impl Sample for TriangleSample {
    fn name(&self) -> &'static str {
        "triangle"
    }

    fn usage(&self) -> &'static str {
        "type HEX | pick | click | quit"
    }

    fn execute(&mut self, verb: &str, arg: &str) -> Result<(), CommandError> {
        let model = self.program.model_mut();
        let event = match verb {
            "type" => {
                model.field.set_text(arg);
                None
            }
            "pick" => Some(model.pick.press()),
            "click" => Some(model.canvas.click()),
            other => return Err(unknown(other)),
        };
        feed(&mut self.program, event);
        Ok(())
    }

    fn view(&self) -> String {
        self.program.view()
    }

    fn is_running(&self) -> bool {
        self.program.is_running()
    }

    fn quit(&mut self) {
        self.program.quit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tether_core::error::{BindError, ValidationReason};

    #[test]
    fn starts_with_initial_colour_in_field() {
        let s = TriangleSample::new();
        assert_eq!(s.model().colour(), INITIAL_COLOUR);
        assert_eq!(s.model().field().text(), "#ff8033");
        assert_eq!(s.model().canvas().colour(), INITIAL_COLOUR);
    }

    #[test]
    fn pick_applies_typed_colour() {
        let mut s = TriangleSample::new();
        s.execute("type", "1020ff").unwrap();
        // Typing alone changes nothing.
        assert_eq!(s.model().colour(), INITIAL_COLOUR);
        s.execute("pick", "").unwrap();
        assert_eq!(s.model().colour(), Rgb::new(0x10, 0x20, 0xff));
        assert_eq!(s.model().canvas().colour(), Rgb::new(0x10, 0x20, 0xff));
        assert_eq!(s.model().field().text(), "#1020ff");
    }

    #[test]
    fn invalid_colour_flagged_not_applied() {
        let mut s = TriangleSample::new();
        s.execute("type", "#12345").unwrap();
        s.execute("pick", "").unwrap();
        assert_eq!(s.model().colour(), INITIAL_COLOUR);
        assert_eq!(
            s.model().field().flagged(),
            Some(&BindError::validation("#12345", ValidationReason::NotAColour))
        );
        assert!(s.view().contains("! invalid"));
    }

    #[test]
    fn canvas_click_changes_nothing() {
        let mut s = TriangleSample::new();
        let before = s.view();
        s.execute("click", "").unwrap();
        assert_eq!(s.view(), before);
    }
}
