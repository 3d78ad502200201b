#![forbid(unsafe_code)]

//! Widget identifiers.
//!
//! A [`WidgetId`] names a display surface or trigger control. It is the key
//! half of the dispatch table and the handle stored in a relay's subscriber
//! set, so it must stay `Copy` and carry no ownership.

use std::fmt;

/// Opaque handle for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u32);

impl WidgetId {
    /// Create an id from a raw value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Sequential id allocator.
///
/// Ids start at [`WidgetIds::BASE`] so application ids never collide with
/// small reserved values.
#[derive(Debug, Clone)]
pub struct WidgetIds {
    next: u32,
}

impl WidgetIds {
    /// First id handed out by a fresh allocator.
    pub const BASE: u32 = 1000;

    /// Create an allocator starting at [`Self::BASE`].
    #[must_use]
    pub fn new() -> Self {
        Self { next: Self::BASE }
    }

    /// Allocate the next id.
    ///
    /// # Panics
    ///
    /// Panics if the id space is exhausted.
    pub fn next_id(&mut self) -> WidgetId {
        let id = WidgetId(self.next);
        self.next = self.next.checked_add(1).expect("widget id space exhausted");
        id
    }
}

impl Default for WidgetIds {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_is_sequential_from_base() {
        let mut ids = WidgetIds::new();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_eq!(a.get(), WidgetIds::BASE);
        assert_eq!(b.get(), WidgetIds::BASE + 1);
        assert!(a < b);
    }

    #[test]
    fn display_uses_hash_prefix() {
        assert_eq!(WidgetId::new(7).to_string(), "#7");
    }
}
