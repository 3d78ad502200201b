#![forbid(unsafe_code)]

//! Virtual list: rows are never cached, only projected on demand.
//!
//! The widget knows an item count and a scroll window. Whenever it needs to
//! draw row `i` it asks [`VirtualList::item_text`] for each cell, which reads
//! straight from the [`RowStore`]. After the model reorders or resizes the
//! store it calls [`VirtualList::set_item_count`] so the window stays valid.

use std::ops::Range;

use tether_core::event::InputEvent;
use tether_core::id::WidgetId;
use tether_runtime::rows::{RowStore, SortColumn, SortDirection};
use tracing::{debug, trace};

use crate::table::{self, COLUMNS};

/// List view that reads its rows from the store on every draw.
#[derive(Debug, Clone)]
pub struct VirtualList {
    id: WidgetId,
    item_count: usize,
    offset: usize,
    height: usize,
    selected: Option<usize>,
    indicator: Option<(SortColumn, SortDirection)>,
}

impl VirtualList {
    /// Create an empty list showing `height` rows at a time (at least 1).
    #[must_use]
    pub fn new(id: WidgetId, height: usize) -> Self {
        Self {
            id,
            item_count: 0,
            offset: 0,
            height: height.max(1),
            selected: None,
            indicator: None,
        }
    }

    /// The widget id.
    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Text of one cell, read from the store at draw time.
    ///
    /// Unknown columns project to an empty string; an index past the end of
    /// the store yields `None`.
    #[must_use]
    pub fn item_text(&self, store: &RowStore, index: usize, column: usize) -> Option<String> {
        let record = store.row(index)?;
        Some(
            SortColumn::from_index(column)
                .map(|col| record.cell(col))
                .unwrap_or_default(),
        )
    }

    /// Update the number of rows and pull the window and selection back
    /// inside it.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        self.offset = self.offset.min(self.max_offset());
        if self.selected.is_some_and(|row| row >= count) {
            self.selected = None;
        }
        debug!(id = %self.id, count, "virtual list resized");
    }

    /// Number of rows.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// First visible row.
    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.offset
    }

    /// Rows currently in the window.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.height).min(self.item_count);
        self.offset..end
    }

    /// Scroll by `delta` rows (positive = down).
    pub fn scroll(&mut self, delta: i64) {
        let max = self.max_offset() as i64;
        let next = (self.offset as i64).saturating_add(delta).clamp(0, max);
        self.offset = next as usize;
    }

    /// Select row `row`.
    pub fn select(&mut self, row: usize) -> Option<InputEvent> {
        if row >= self.item_count {
            return None;
        }
        self.selected = Some(row);
        trace!(id = %self.id, row, "virtual row selected");
        Some(InputEvent::row_selected(self.id, row))
    }

    /// Selected row.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Start editing the label of row `row`.
    pub fn begin_edit(&self, row: usize) -> Option<InputEvent> {
        if row >= self.item_count {
            return None;
        }
        Some(InputEvent::edit_started(self.id, row))
    }

    /// Column header click.
    pub fn click_header(&self, column: usize) -> Option<InputEvent> {
        (column < COLUMNS).then(|| InputEvent::column_clicked(self.id, column))
    }

    /// Show which column the rows are sorted on.
    pub fn set_sort_indicator(&mut self, indicator: Option<(SortColumn, SortDirection)>) {
        self.indicator = indicator;
    }

    /// Draw the visible window, projecting each cell from `store`.
    #[must_use]
    pub fn render(&self, store: &RowStore) -> String {
        let range = self.visible_range();
        let rows: Vec<_> = range
            .clone()
            .map(|i| {
                let cells = [0, 1, 2].map(|col| self.item_text(store, i, col).unwrap_or_default());
                (self.selected == Some(i), cells)
            })
            .collect();
        let body = table::render(&table::header(self.indicator), &rows);
        let footer = if range.is_empty() {
            format!("rows 0 of {}", self.item_count)
        } else {
            format!("rows {}-{} of {}", range.start + 1, range.end, self.item_count)
        };
        format!("{body}\n{footer}")
    }

    fn max_offset(&self) -> usize {
        self.item_count.saturating_sub(self.height)
    }
}
