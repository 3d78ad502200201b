#![forbid(unsafe_code)]

//! Report-style list backed by a [`RowStore`].
//!
//! Each displayed row remembers the [`RecordKey`] of the record it was
//! projected from, never a reference. The widget does no sorting of its own:
//! the model reorders the store and calls [`ListView::refresh`], which
//! re-projects every row. Selection follows the record, not the position, so
//! a selected row stays selected when a sort moves it.
//!
//! # Invariants
//!
//! 1. After `refresh`, row `i` shows exactly the cells of `store.row(i)`.
//! 2. A selection whose record has been removed is dropped on `refresh`.

use tether_core::event::InputEvent;
use tether_core::id::WidgetId;
use tether_runtime::rows::{Record, RecordKey, RowStore, SortColumn, SortDirection};
use tracing::{debug, trace};

use crate::Surface;
use crate::table::{self, COLUMNS};

/// List control with one row per record.
#[derive(Debug, Clone)]
pub struct ListView {
    id: WidgetId,
    rows: Vec<RecordKey>,
    cells: Vec<[String; COLUMNS]>,
    selected: Option<RecordKey>,
    indicator: Option<(SortColumn, SortDirection)>,
}

impl ListView {
    /// Create an empty list.
    #[must_use]
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            rows: Vec::new(),
            cells: Vec::new(),
            selected: None,
            indicator: None,
        }
    }

    /// Re-project every row from `store` in its display order.
    pub fn refresh(&mut self, store: &RowStore) {
        self.rows.clear();
        self.cells.clear();
        for (key, record) in store.iter() {
            self.rows.push(key);
            self.cells.push(record.cells());
        }
        if self.selected.is_some_and(|key| !store.contains(key)) {
            self.selected = None;
        }
        debug!(id = %self.id, rows = self.rows.len(), "list refreshed");
    }

    /// Number of displayed rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows are displayed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Displayed cells of row `row`.
    #[must_use]
    pub fn cells(&self, row: usize) -> Option<&[String; COLUMNS]> {
        self.cells.get(row)
    }

    /// Key stored on row `row`.
    #[must_use]
    pub fn key(&self, row: usize) -> Option<RecordKey> {
        self.rows.get(row).copied()
    }

    /// Resolve row `row` back to its record.
    #[must_use]
    pub fn record<'s>(&self, row: usize, store: &'s RowStore) -> Option<&'s Record> {
        self.key(row).and_then(|key| store.get(key))
    }

    /// Column header click.
    pub fn click_header(&self, column: usize) -> Option<InputEvent> {
        if column >= COLUMNS {
            return None;
        }
        trace!(id = %self.id, column, "header clicked");
        Some(InputEvent::column_clicked(self.id, column))
    }

    /// Select row `row`.
    pub fn select(&mut self, row: usize) -> Option<InputEvent> {
        let key = self.key(row)?;
        self.selected = Some(key);
        trace!(id = %self.id, row, %key, "row selected");
        Some(InputEvent::row_selected(self.id, row))
    }

    /// Key of the selected record.
    #[must_use]
    pub fn selected_key(&self) -> Option<RecordKey> {
        self.selected
    }

    /// Current position of the selected record.
    #[must_use]
    pub fn selected_row(&self) -> Option<usize> {
        let key = self.selected?;
        self.rows.iter().position(|k| *k == key)
    }

    /// Show which column the rows are sorted on.
    pub fn set_sort_indicator(&mut self, indicator: Option<(SortColumn, SortDirection)>) {
        self.indicator = indicator;
    }

    /// The column and direction currently marked.
    #[must_use]
    pub fn sort_indicator(&self) -> Option<(SortColumn, SortDirection)> {
        self.indicator
    }
}

impl Surface for ListView {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn render(&self) -> String {
        let rows: Vec<_> = self
            .rows
            .iter()
            .zip(&self.cells)
            .map(|(key, cells)| (Some(*key) == self.selected, cells.clone()))
            .collect();
        table::render(&table::header(self.indicator), &rows)
    }
}
