#![forbid(unsafe_code)]

//! Generational arena of list records with a separate display order.
//!
//! Records live in slots addressed by [`RecordKey`]. List widgets keep keys,
//! never references, and resolve them through the store when they need a
//! record. Removing a record frees its slot and bumps the slot generation,
//! so every key handed out for the old occupant stops resolving.
//!
//! # Invariants
//!
//! 1. `order` holds each live key exactly once and no dead keys.
//! 2. A key resolves iff its slot is occupied and generations match.
//! 3. Freed slots are reused before the slot vector grows.
//!
//! # Usage
//!
//! ```
//! use tether_runtime::rows::{Record, RowStore, SortColumn, SortDirection};
//!
//! let mut store = RowStore::new();
//! let a = store.insert(Record::new(20, "A", "foo"));
//! let b = store.insert(Record::new(8, "C", "max"));
//!
//! store.sort_by(SortColumn::Id, SortDirection::Ascending);
//! assert_eq!(store.keys(), &[b, a]);
//!
//! store.remove(a);
//! assert!(store.get(a).is_none());
//! ```

use std::fmt;

use tracing::trace;

use super::sort::{SortColumn, SortDirection, compare_directed};

/// One list row's backing data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Record {
    /// Create a record.
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Text projection of one column.
    #[must_use]
    pub fn cell(&self, column: SortColumn) -> String {
        match column {
            SortColumn::Id => self.id.to_string(),
            SortColumn::Name => self.name.clone(),
            SortColumn::Description => self.description.clone(),
        }
    }

    /// All three cells in display order.
    #[must_use]
    pub fn cells(&self) -> [String; 3] {
        SortColumn::ALL.map(|col| self.cell(col))
    }
}

/// Handle to a record slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    index: u32,
    generation: u32,
}

impl RecordKey {
    /// Slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Slot generation at the time the key was issued.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    record: Option<Record>,
}

/// Owner of every list record.
#[derive(Debug, Clone, Default)]
pub struct RowStore {
    /// Slot storage. A `None` record marks a free slot.
    slots: Vec<Slot>,
    /// Free slot indices for reuse.
    free_list: Vec<u32>,
    /// Live keys in display order.
    order: Vec<RecordKey>,
}

impl RowStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` and append it to the display order.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` slots would be needed.
    pub fn insert(&mut self, record: Record) -> RecordKey {
        let key = match self.free_list.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.record = Some(record);
                RecordKey {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = u32::try_from(self.slots.len()).expect("row store slot overflow");
                self.slots.push(Slot {
                    generation: 0,
                    record: Some(record),
                });
                RecordKey {
                    index,
                    generation: 0,
                }
            }
        };
        self.order.push(key);
        trace!(%key, "record inserted");
        key
    }

    /// Remove the record behind `key`. Stale keys return `None`.
    pub fn remove(&mut self, key: RecordKey) -> Option<Record> {
        let slot = self.slot_mut(key)?;
        let record = slot.record.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(key.index);
        self.order.retain(|k| *k != key);
        trace!(%key, "record removed");
        Some(record)
    }

    /// Resolve a key.
    #[must_use]
    pub fn get(&self, key: RecordKey) -> Option<&Record> {
        self.slots
            .get(key.index as usize)
            .filter(|slot| slot.generation == key.generation)
            .and_then(|slot| slot.record.as_ref())
    }

    /// Resolve a key mutably.
    pub fn get_mut(&mut self, key: RecordKey) -> Option<&mut Record> {
        self.slot_mut(key).and_then(|slot| slot.record.as_mut())
    }

    /// Whether `key` still resolves.
    #[must_use]
    pub fn contains(&self, key: RecordKey) -> bool {
        self.get(key).is_some()
    }

    /// Number of live records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Live keys in display order.
    #[must_use]
    pub fn keys(&self) -> &[RecordKey] {
        &self.order
    }

    /// Key at display position `position`.
    #[must_use]
    pub fn key_at(&self, position: usize) -> Option<RecordKey> {
        self.order.get(position).copied()
    }

    /// Record at display position `position`.
    #[must_use]
    pub fn row(&self, position: usize) -> Option<&Record> {
        self.key_at(position).and_then(|key| self.get(key))
    }

    /// Records with their keys, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordKey, &Record)> + '_ {
        self.order
            .iter()
            .filter_map(|&key| self.get(key).map(|record| (key, record)))
    }

    /// Stable sort of the display order by one column.
    pub fn sort_by(&mut self, column: SortColumn, direction: SortDirection) {
        let slots = &self.slots;
        let record = |key: &RecordKey| slots[key.index as usize].record.as_ref();
        self.order.sort_by(|a, b| match (record(a), record(b)) {
            (Some(ra), Some(rb)) => compare_directed(ra, rb, column, direction),
            _ => std::cmp::Ordering::Equal,
        });
        trace!(?column, ?direction, rows = self.order.len(), "rows sorted");
    }

    fn slot_mut(&mut self, key: RecordKey) -> Option<&mut Slot> {
        self.slots
            .get_mut(key.index as usize)
            .filter(|slot| slot.generation == key.generation)
    }
}

impl FromIterator<Record> for RowStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut store = Self::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}
