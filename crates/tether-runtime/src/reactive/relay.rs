#![forbid(unsafe_code)]

//! Change notification relay: one authoritative bounded value, many views.
//!
//! # Design
//!
//! [`ChangeRelay<H>`] owns a [`BoundedValue`] and an ordered list of
//! subscriber handles `H`. Handles are opaque and non-owning (typically a
//! `WidgetId`); the relay resolves nothing itself. Instead,
//! [`ChangeRelay::propagate`] hands each handle, in registration order, to a
//! caller-supplied `pull` closure that looks the surface up and refreshes it.
//!
//! Mutation and propagation are split: an accepted [`ChangeRelay::set_value`]
//! or [`ChangeRelay::reset`] only marks the relay pending. The caller posts a
//! change message to the back of its event queue and calls `propagate` when
//! that message is dispatched, so views refresh after every event already
//! queued ahead of the change.
//!
//! # Invariants
//!
//! 1. `version` increments by exactly 1 per mutation that changes the value.
//! 2. Every accepted set or reset marks the relay pending, even when the
//!    stored value is unchanged, so the originating view is re-normalised.
//! 3. A rejected set changes neither value, version, nor pending flag.
//! 4. Subscribers are pulled in registration order.
//! 5. A failing subscriber is logged and skipped; later subscribers are still
//!    pulled and earlier ones are not rolled back.
//!
//! # Failure Modes
//!
//! - **Duplicate subscription**: `subscribe` does not de-duplicate; a handle
//!   registered twice is pulled twice.
//! - **Dangling handle**: if `pull` cannot resolve a handle it should return
//!   a [`PullError`]; the relay records it and continues.

use std::fmt;

use tether_core::error::{BindError, PullError};
use tracing::{debug, warn};

use super::bounded::{BoundedValue, Resettable, SetPolicy};

/// Outcome of one propagation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Propagation<H> {
    /// Subscribers that refreshed successfully.
    pub notified: usize,
    /// Subscribers that failed, in the order they were pulled.
    pub failures: Vec<(H, PullError)>,
}

impl<H> Propagation<H> {
    /// Whether every subscriber refreshed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A bounded value with an ordered set of subscribed display surfaces.
pub struct ChangeRelay<H> {
    value: BoundedValue,
    subscribers: Vec<H>,
    version: u64,
    pending: bool,
}

impl<H: fmt::Debug> fmt::Debug for ChangeRelay<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeRelay")
            .field("value", &self.value.get())
            .field("bounds", &self.value.bounds())
            .field("version", &self.version)
            .field("pending", &self.pending)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}

impl<H: Copy + fmt::Debug> ChangeRelay<H> {
    /// Create a relay around `value` with no subscribers.
    #[must_use]
    pub fn new(value: BoundedValue) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            version: 0,
            pending: false,
        }
    }

    /// Current value.
    #[inline]
    #[must_use]
    pub fn get(&self) -> i64 {
        self.value.get()
    }

    /// The underlying bounded value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &BoundedValue {
        &self.value
    }

    /// Number of value-changing mutations so far.
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether a propagation has been scheduled but not yet run.
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Append `handle` to the subscriber set.
    pub fn subscribe(&mut self, handle: H) {
        debug!(?handle, position = self.subscribers.len(), "relay subscribe");
        self.subscribers.push(handle);
    }

    /// Subscribers in registration order.
    #[must_use]
    pub fn subscribers(&self) -> &[H] {
        &self.subscribers
    }

    /// Store `candidate` under `policy` and schedule propagation.
    ///
    /// Returns the stored value. On [`SetPolicy::Reject`] an out-of-range
    /// candidate fails with [`BindError::OutOfRange`] and nothing changes.
    pub fn set_value(&mut self, candidate: i64, policy: SetPolicy) -> Result<i64, BindError> {
        let changed = self.value.set(candidate, policy)?;
        self.accept(changed);
        Ok(self.value.get())
    }

    /// Mark the relay pending without touching the value.
    ///
    /// Used for the first transfer into freshly built views.
    pub fn schedule(&mut self) {
        self.pending = true;
    }

    /// Run a propagation pass, pulling each subscriber in registration order.
    ///
    /// Clears the pending flag whether or not any subscriber fails.
    pub fn propagate<F>(&mut self, mut pull: F) -> Propagation<H>
    where
        F: FnMut(H, &BoundedValue) -> Result<(), PullError>,
    {
        self.pending = false;
        let snapshot = self.value;
        let mut report = Propagation {
            notified: 0,
            failures: Vec::new(),
        };
        for &handle in &self.subscribers {
            match pull(handle, &snapshot) {
                Ok(()) => report.notified += 1,
                Err(err) => {
                    warn!(?handle, error = %err, "subscriber refresh failed; continuing");
                    report.failures.push((handle, err));
                }
            }
        }
        debug!(
            value = snapshot.get(),
            version = self.version,
            notified = report.notified,
            failed = report.failures.len(),
            "relay propagated"
        );
        report
    }

    fn accept(&mut self, changed: bool) {
        if changed {
            self.version += 1;
        }
        self.pending = true;
    }
}

impl<H: Copy + fmt::Debug> Resettable for ChangeRelay<H> {
    fn reset(&mut self) {
        let before = self.value.get();
        self.value.reset();
        self.accept(before != self.value.get());
    }
}
