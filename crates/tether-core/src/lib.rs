#![forbid(unsafe_code)]

//! Core: widget identity, input events, and the error taxonomy.
//!
//! # Role in tether
//! `tether-core` is the vocabulary shared by every other crate. Widgets emit
//! [`event::InputEvent`]s tagged with their [`id::WidgetId`], the runtime
//! routes them through a dispatch table keyed by `(WidgetId, EventKind)`,
//! and validation failures surface as [`error::BindError`].
//!
//! # Primary responsibilities
//! - **WidgetId**: opaque, copyable handles for display surfaces. Holders of a
//!   `WidgetId` never own the widget it names.
//! - **InputEvent**: raw input as emitted by a widget (drag, text commit,
//!   focus loss, activation, header click, row selection).
//! - **BindError / PullError**: recoverable failures at input handlers and
//!   during view refresh.
//! - **Rgb**: the colour value used by the canvas sample.

pub mod color;
pub mod error;
pub mod event;
pub mod id;
pub mod logging;

pub use color::Rgb;
pub use error::{BindError, PullError, ValidationReason};
pub use event::{EventKind, InputEvent, InputKind};
pub use id::{WidgetId, WidgetIds};
