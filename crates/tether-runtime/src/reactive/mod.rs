#![forbid(unsafe_code)]

//! Reactive model primitives.
//!
//! - [`BoundedValue`]: an integer that never leaves its [`Bounds`].
//! - [`ChangeRelay`]: a bounded value plus an ordered subscriber set, with
//!   propagation split from mutation so it can be deferred through the
//!   event queue.
//! - [`Resettable`]: the one-method reset capability shared by both.
//!
//! # Invariants
//!
//! 1. Version increments exactly once per mutation that changes the value.
//! 2. Subscribers are notified in registration order.
//! 3. Rejected entries change nothing and schedule nothing.

pub mod bounded;
pub mod relay;

pub use bounded::{BoundedValue, Bounds, Resettable, SetPolicy};
pub use relay::{ChangeRelay, Propagation};
