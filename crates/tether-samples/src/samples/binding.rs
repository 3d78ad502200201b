#![forbid(unsafe_code)]

//! Slider, text field, and reset button bound to one value.
//!
//! All three inputs converge on a single [`ChangeRelay`]. Handlers only
//! mutate the relay and post [`BindingMsg::ValueChanged`]; the views are
//! refreshed when that message reaches the front of the queue.
//!
//! | Input | Policy | On failure |
//! |-------|--------|------------|
//! | slider drag | clamp | n/a |
//! | Enter in text field | reject | field flagged, model unchanged |
//! | text field loses focus | clamp | field flagged if not a number |
//! | reset button | go to minimum | n/a |

use tether_core::error::{BindError, PullError};
use tether_core::event::{EventKind, InputKind};
use tether_core::id::{WidgetId, WidgetIds};
use tether_runtime::dispatch::Bindings;
use tether_runtime::program::{Cmd, Model, Program};
use tether_runtime::reactive::{BoundedValue, Bounds, ChangeRelay, Resettable, SetPolicy};
use tether_runtime::validate::IntegerValidator;
use tether_widgets::{Button, Slider, Surface, TextField, ValueSurface};
use tracing::{debug, trace};

use crate::host::{CommandError, Sample, feed, int_arg, unknown};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingMsg {
    Dragged(i64),
    EntryCommitted(String),
    EntryBlurred(String),
    ResetPressed,
    /// Posted after every accepted mutation; refreshes the subscribers.
    ValueChanged,
}

/// Model for the binding sample.
#[derive(Debug)]
pub struct BindingModel {
    relay: ChangeRelay<WidgetId>,
    validator: IntegerValidator,
    slider: Slider,
    entry: TextField,
    reset: Button,
    refreshes: u64,
}

impl BindingModel {
    /// Build the widgets and subscribe slider then text field.
    #[must_use]
    pub fn new(bounds: Bounds, initial: i64) -> Self {
        let mut ids = WidgetIds::new();
        let slider = Slider::new(ids.next_id(), bounds, initial);
        let entry = TextField::new(ids.next_id(), "Value");
        let reset = Button::new(ids.next_id(), "Reset");

        let mut relay = ChangeRelay::new(BoundedValue::new(initial, bounds));
        relay.subscribe(slider.id());
        relay.subscribe(entry.id());

        Self {
            relay,
            validator: IntegerValidator::new(bounds),
            slider,
            entry,
            reset,
            refreshes: 0,
        }
    }

    /// Dispatch table for this model's widgets.
    #[must_use]
    pub fn bindings(&self) -> Bindings<BindingMsg> {
        Bindings::new()
            .with(self.slider.id(), EventKind::Dragged, |ev| match ev.kind {
                InputKind::Dragged(v) => Some(BindingMsg::Dragged(v)),
                _ => None,
            })
            .with(self.entry.id(), EventKind::TextCommitted, |ev| match &ev.kind {
                InputKind::TextCommitted(text) => Some(BindingMsg::EntryCommitted(text.clone())),
                _ => None,
            })
            .with(self.entry.id(), EventKind::FocusLost, |ev| match &ev.kind {
                InputKind::FocusLost(text) => Some(BindingMsg::EntryBlurred(text.clone())),
                _ => None,
            })
            .with(self.reset.id(), EventKind::Activated, |_| {
                Some(BindingMsg::ResetPressed)
            })
    }

    /// The authoritative value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.relay.get()
    }

    /// The relay.
    #[must_use]
    pub fn relay(&self) -> &ChangeRelay<WidgetId> {
        &self.relay
    }

    /// The slider.
    #[must_use]
    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    /// The text field.
    #[must_use]
    pub fn entry(&self) -> &TextField {
        &self.entry
    }

    /// Number of propagation passes run so far.
    #[must_use]
    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }

    fn accepted(&mut self, result: Result<i64, BindError>) -> Cmd<BindingMsg> {
        match result {
            Ok(stored) => {
                trace!(stored, version = self.relay.version(), "value accepted");
                Cmd::post(BindingMsg::ValueChanged)
            }
            Err(err) => {
                let note = format!("entry {}: {err}", err.label());
                self.entry.flag(err);
                Cmd::log(note)
            }
        }
    }

    fn propagate(&mut self) -> Cmd<BindingMsg> {
        if !self.relay.is_pending() {
            trace!("change already propagated");
            return Cmd::none();
        }
        let slider = &mut self.slider;
        let entry = &mut self.entry;
        let report = self.relay.propagate(|handle, value| {
            if handle == slider.id() {
                slider.pull(value)
            } else if handle == entry.id() {
                entry.pull(value)
            } else {
                Err(PullError::new(handle, "no such surface"))
            }
        });
        self.refreshes += 1;
        debug!(notified = report.notified, failed = report.failures.len(), "views refreshed");
        Cmd::none()
    }
}

impl Model for BindingModel {
    type Message = BindingMsg;

    fn init(&mut self) -> Cmd<BindingMsg> {
        self.relay.schedule();
        Cmd::post(BindingMsg::ValueChanged)
    }

    fn update(&mut self, msg: BindingMsg) -> Cmd<BindingMsg> {
        match msg {
            BindingMsg::Dragged(v) => {
                let result = self.relay.set_value(v, SetPolicy::Clamp);
                self.accepted(result)
            }
            BindingMsg::EntryCommitted(text) => {
                let result = self
                    .validator
                    .validate(&text)
                    .and_then(|v| self.relay.set_value(v, SetPolicy::Reject));
                self.accepted(result)
            }
            BindingMsg::EntryBlurred(text) => {
                let result = self
                    .validator
                    .coerce(&text)
                    .and_then(|v| self.relay.set_value(v, SetPolicy::Clamp));
                self.accepted(result)
            }
            BindingMsg::ResetPressed => {
                self.relay.reset();
                Cmd::post(BindingMsg::ValueChanged)
            }
            BindingMsg::ValueChanged => self.propagate(),
        }
    }

    fn view(&self) -> String {
        [
            self.slider.render(),
            self.entry.render(),
            self.reset.render(),
        ]
        .join("\n")
    }
}

/// Runnable binding sample.
#[derive(Debug)]
pub struct BindingSample {
    program: Program<BindingModel>,
}

impl BindingSample {
    /// Create the sample and run its startup transfer.
    #[must_use]
    pub fn new(bounds: Bounds, initial: i64) -> Self {
        let model = BindingModel::new(bounds, initial);
        let bindings = model.bindings();
        let mut program = Program::new(model, bindings);
        feed(&mut program, None);
        Self { program }
    }

    /// The model.
    #[must_use]
    pub fn model(&self) -> &BindingModel {
        self.program.model()
    }
}

impl Sample for BindingSample {
    fn name(&self) -> &'static str {
        "binding"
    }

    fn usage(&self) -> &'static str {
        "drag N | step N | type TEXT | clear | back | enter | blur | reset | quit"
    }

    fn execute(&mut self, verb: &str, arg: &str) -> Result<(), CommandError> {
        let model = self.program.model_mut();
        let event = match verb {
            "drag" => Some(model.slider.drag_to(int_arg(verb, arg)?)),
            "step" => Some(model.slider.step(int_arg(verb, arg)?)),
            "type" => {
                model.entry.insert_str(arg);
                None
            }
            "clear" => {
                model.entry.clear();
                None
            }
            "back" => {
                model.entry.backspace();
                None
            }
            "enter" => Some(model.entry.commit()),
            "blur" => Some(model.entry.blur()),
            "reset" => Some(model.reset.press()),
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
