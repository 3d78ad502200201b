#![forbid(unsafe_code)]

//! Dispatch table from widget input to model messages.
//!
//! [`Bindings<M>`] is an explicit registration map keyed by
//! `(WidgetId, EventKind)`. Each entry converts a raw [`InputEvent`] into an
//! optional model message. The [`Program`](crate::program::Program) consults
//! it for every input and enqueues whatever message comes back.
//!
//! # Invariants
//!
//! 1. At most one handler per key; binding an occupied key replaces it.
//! 2. An event whose key is unbound resolves to `None` and never reaches the
//!    model.

use std::fmt;

use rustc_hash::FxHashMap;
use tether_core::event::{EventKind, InputEvent};
use tether_core::id::WidgetId;
use tracing::debug;

type Handler<M> = Box<dyn Fn(&InputEvent) -> Option<M>>;

/// Registration map from `(source, kind)` to a message constructor.
pub struct Bindings<M> {
    table: FxHashMap<(WidgetId, EventKind), Handler<M>>,
}

impl<M> fmt::Debug for Bindings<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.table.keys().copied().collect();
        keys.sort();
        f.debug_struct("Bindings").field("keys", &keys).finish()
    }
}

impl<M> Default for Bindings<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Bindings<M> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: FxHashMap::default(),
        }
    }

    /// Register `handler` for `kind` events from `source`.
    ///
    /// Returns `true` if an earlier handler for the same key was replaced.
    pub fn bind<F>(&mut self, source: WidgetId, kind: EventKind, handler: F) -> bool
    where
        F: Fn(&InputEvent) -> Option<M> + 'static,
    {
        let replaced = self
            .table
            .insert((source, kind), Box::new(handler))
            .is_some();
        if replaced {
            debug!(%source, ?kind, "binding replaced");
        }
        replaced
    }

    /// Builder form of [`bind`](Self::bind).
    #[must_use]
    pub fn with<F>(mut self, source: WidgetId, kind: EventKind, handler: F) -> Self
    where
        F: Fn(&InputEvent) -> Option<M> + 'static,
    {
        self.bind(source, kind, handler);
        self
    }

    /// Convert `event` into a message if a handler is bound for its key.
    #[must_use]
    pub fn resolve(&self, event: &InputEvent) -> Option<M> {
        self.table.get(&event.key()).and_then(|handler| handler(event))
    }

    /// Whether a handler is bound for the key.
    #[must_use]
    pub fn contains(&self, source: WidgetId, kind: EventKind) -> bool {
        self.table.contains_key(&(source, kind))
    }

    /// Number of bound keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tether_core::event::InputKind;

    #[derive(Debug, PartialEq)]
    enum Msg {
        Moved(i64),
        Pressed,
    }

    fn slider() -> WidgetId {
        WidgetId::new(1)
    }

    fn button() -> WidgetId {
        WidgetId::new(2)
    }

    fn table() -> Bindings<Msg> {
        Bindings::new()
            .with(slider(), EventKind::Dragged, |ev| match ev.kind {
                InputKind::Dragged(v) => Some(Msg::Moved(v)),
                _ => None,
            })
            .with(button(), EventKind::Activated, |_| Some(Msg::Pressed))
    }

    #[test]
    fn resolves_by_source_and_kind() {
        let b = table();
        assert_eq!(
            b.resolve(&InputEvent::dragged(slider(), 5)),
            Some(Msg::Moved(5))
        );
        assert_eq!(
            b.resolve(&InputEvent::activated(button())),
            Some(Msg::Pressed)
        );
    }

    #[test]
    fn unbound_key_resolves_to_none() {
        let b = table();
        // Right kind, wrong source.
        assert_eq!(b.resolve(&InputEvent::activated(slider())), None);
        // Right source, wrong kind.
        assert_eq!(b.resolve(&InputEvent::text_committed(slider(), "1")), None);
    }

    #[test]
    fn rebinding_replaces() {
        let mut b = table();
        assert_eq!(b.len(), 2);
        assert!(b.bind(button(), EventKind::Activated, |_| Some(Msg::Moved(0))));
        assert_eq!(b.len(), 2);
        assert_eq!(
            b.resolve(&InputEvent::activated(button())),
            Some(Msg::Moved(0))
        );
    }

    #[test]
    fn debug_lists_sorted_keys() {
        let dbg = format!("{:?}", table());
        assert!(dbg.starts_with("Bindings"));
        let dragged = dbg.find("Dragged").unwrap();
        let activated = dbg.find("Activated").unwrap();
        assert!(dragged < activated);
    }
}
