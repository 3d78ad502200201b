#![forbid(unsafe_code)]

//! Terminal renditions of the tether samples.
//!
//! Each sample owns a [`Program`](tether_runtime::Program) whose model holds
//! the widgets. The [`host`] loop reads line commands, turns them into
//! widget actions, and prints the rendered view after each one.

pub mod cli;
pub mod host;
pub mod samples;

pub use cli::{CliError, SampleKind, SampleOptions};
pub use host::{CommandError, Sample};
