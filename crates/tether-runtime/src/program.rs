#![forbid(unsafe_code)]

//! Elm-style message loop over a single FIFO event queue.
//!
//! The program owns the application [`Model`], a [`Bindings`] dispatch
//! table, and a queue of pending messages. Widget input enters through
//! [`Program::input`], is resolved to a message by the dispatch table, and is
//! appended to the queue. [`Program::run_until_idle`] drains the queue, calling
//! [`Model::update`] for each message and executing the returned [`Cmd`].
//!
//! # Example
//!
//! ```ignore
//! use tether_runtime::program::{Cmd, Model, Program};
//! use tether_runtime::dispatch::Bindings;
//!
//! struct Counter { count: i64 }
//!
//! #[derive(Debug)]
//! enum Msg { Add(i64), Changed }
//!
//! impl Model for Counter {
//!     type Message = Msg;
//!
//!     fn update(&mut self, msg: Msg) -> Cmd<Msg> {
//!         match msg {
//!             Msg::Add(n) => { self.count += n; Cmd::post(Msg::Changed) }
//!             Msg::Changed => Cmd::none(),
//!         }
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("count: {}", self.count)
//!     }
//! }
//!
//! let mut program = Program::new(Counter { count: 0 }, Bindings::new());
//! program.post(Msg::Add(2));
//! program.run_until_idle();
//! assert_eq!(program.view(), "count: 2");
//! ```
//!
//! # Ordering
//!
//! [`Cmd::Msg`] is handled immediately, before `update` returns control to
//! the loop. [`Cmd::Post`] is appended to the back of the queue, so it runs
//! after every message that was already queued, including input that arrived
//! while the current message was being handled.

use std::collections::VecDeque;
use std::fmt;

use tether_core::event::InputEvent;
use tracing::{debug, info, trace, warn};

use crate::dispatch::Bindings;

/// Application state and behaviour.
pub trait Model: Sized {
    /// Messages that drive state transitions.
    type Message: fmt::Debug;

    /// Startup commands, run once by [`Program::init`].
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Apply a message and return follow-up commands.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state as text.
    fn view(&self) -> String;
}

/// Side effects requested by `init` or `update`.
pub enum Cmd<M> {
    /// No operation.
    None,
    /// Stop the program.
    Quit,
    /// Execute multiple commands in order.
    Batch(Vec<Cmd<M>>),
    /// Execute commands in order, stopping once the program quits.
    Sequence(Vec<Cmd<M>>),
    /// Handle a message immediately.
    Msg(M),
    /// Append a message to the back of the queue.
    Post(M),
    /// Emit a log line.
    Log(String),
}

impl<M> Default for Cmd<M> {
    fn default() -> Self {
        Self::None
    }
}

impl<M: fmt::Debug> fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Quit => write!(f, "Quit"),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
            Self::Sequence(cmds) => f.debug_tuple("Sequence").field(cmds).finish(),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Post(m) => f.debug_tuple("Post").field(m).finish(),
            Self::Log(s) => f.debug_tuple("Log").field(s).finish(),
        }
    }
}

impl<M> Cmd<M> {
    /// No-op.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Quit.
    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Immediate message.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Deferred message.
    #[inline]
    pub fn post(m: M) -> Self {
        Self::Post(m)
    }

    /// Log line.
    #[inline]
    pub fn log(msg: impl Into<String>) -> Self {
        Self::Log(msg.into())
    }

    /// Batch of commands; collapses empty and single-element batches.
    pub fn batch(mut cmds: Vec<Self>) -> Self {
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or(Self::None),
            _ => Self::Batch(cmds),
        }
    }

    /// Sequence of commands; collapses empty and single-element sequences.
    pub fn sequence(mut cmds: Vec<Self>) -> Self {
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or(Self::None),
            _ => Self::Sequence(cmds),
        }
    }
}

/// Configuration for the message loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramConfig {
    /// Upper bound on messages handled by one [`Program::run_until_idle`]
    /// call. Anything beyond stays queued for the next drain.
    pub max_messages_per_drain: usize,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            max_messages_per_drain: 10_000,
        }
    }
}

impl ProgramConfig {
    /// Set the per-drain message bound (at least 1).
    #[must_use]
    pub fn with_max_messages_per_drain(mut self, max: usize) -> Self {
        self.max_messages_per_drain = max.max(1);
        self
    }
}

/// The message loop.
pub struct Program<M: Model> {
    model: M,
    bindings: Bindings<M::Message>,
    queue: VecDeque<M::Message>,
    config: ProgramConfig,
    running: bool,
    initialized: bool,
    dirty: bool,
    dispatched: u64,
}

impl<M: Model> fmt::Debug for Program<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program")
            .field("bindings", &self.bindings)
            .field("pending", &self.queue.len())
            .field("running", &self.running)
            .field("dispatched", &self.dispatched)
            .finish_non_exhaustive()
    }
}

impl<M: Model> Program<M> {
    /// Create a program with the default configuration.
    pub fn new(model: M, bindings: Bindings<M::Message>) -> Self {
        Self::with_config(model, bindings, ProgramConfig::default())
    }

    /// Create a program with an explicit configuration.
    pub fn with_config(model: M, bindings: Bindings<M::Message>, config: ProgramConfig) -> Self {
        Self {
            model,
            bindings,
            queue: VecDeque::new(),
            config,
            running: true,
            initialized: false,
            dirty: true,
            dispatched: 0,
        }
    }

    /// Run [`Model::init`] once. Later calls are no-ops.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        let cmd = self.model.init();
        self.execute_cmd(cmd);
    }

    /// Route a widget event through the dispatch table.
    ///
    /// Returns `true` if a message was queued. Unbound events, events whose
    /// handler declined them, and input after quit are dropped.
    pub fn input(&mut self, event: InputEvent) -> bool {
        if !self.running {
            debug!(source = %event.source, "input after quit dropped");
            return false;
        }
        match self.bindings.resolve(&event) {
            Some(msg) => {
                trace!(source = %event.source, ?msg, "input resolved");
                self.queue.push_back(msg);
                true
            }
            None => {
                debug!(source = %event.source, kind = ?event.kind.kind(), "unbound input dropped");
                false
            }
        }
    }

    /// Append a message to the back of the queue.
    pub fn post(&mut self, msg: M::Message) {
        self.queue.push_back(msg);
    }

    /// Drain the queue in FIFO order.
    ///
    /// Stops early on quit or after `max_messages_per_drain` messages.
    /// Returns the number of queued messages handled.
    pub fn run_until_idle(&mut self) -> usize {
        self.init();
        let mut handled = 0usize;
        while self.running {
            if handled >= self.config.max_messages_per_drain {
                warn!(
                    remaining = self.queue.len(),
                    limit = self.config.max_messages_per_drain,
                    "drain limit reached; leaving messages queued"
                );
                break;
            }
            let Some(msg) = self.queue.pop_front() else {
                break;
            };
            self.dispatch(msg);
            handled += 1;
        }
        handled
    }

    /// Render the model.
    pub fn view(&self) -> String {
        self.model.view()
    }

    /// The model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the model (for widget-local edits such as typing).
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// The active configuration.
    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }

    /// Whether the program is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the program; queued messages are left unhandled.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Messages waiting in the queue.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Total messages handled by `update`, including immediate ones.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Whether the model changed since the last call; resets the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn dispatch(&mut self, msg: M::Message) {
        trace!(?msg, "dispatch");
        self.dispatched += 1;
        let cmd = self.model.update(msg);
        self.dirty = true;
        self.execute_cmd(cmd);
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => {
                info!("quit requested");
                self.running = false;
            }
            Cmd::Msg(m) => self.dispatch(m),
            Cmd::Post(m) => self.queue.push_back(m),
            Cmd::Batch(cmds) => {
                for c in cmds {
                    self.execute_cmd(c);
                }
            }
            Cmd::Sequence(cmds) => {
                for c in cmds {
                    self.execute_cmd(c);
                    if !self.running {
                        break;
                    }
                }
            }
            Cmd::Log(text) => info!(target: "tether::app", "{}", text.trim_end()),
        }
    }
}
