#![forbid(unsafe_code)]

//! Virtual list over the same records as the list sample.
//!
//! The widget caches nothing. A header click sorts the store ascending by
//! that column and posts [`VirtualMsg::Refresh`], which only resets the item
//! count; the next draw reads every visible cell straight from the store.

use tether_core::event::{EventKind, InputKind};
use tether_core::id::WidgetIds;
use tether_runtime::dispatch::Bindings;
use tether_runtime::program::{Cmd, Model, Program};
use tether_runtime::rows::{Record, RowStore, SortColumn, SortDirection};
use tether_widgets::VirtualList;
use tracing::debug;

use super::list::seed_records;
use crate::host::{CommandError, Sample, feed, index_arg, int_arg, no_such_target, unknown};

/// Rows visible at once.
pub const VISIBLE_ROWS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VirtualMsg {
    HeaderClicked(usize),
    RowSelected(usize),
    EditStarted(usize),
    /// Tell the widget the store changed.
    Refresh,
}

/// Model for the virtual list sample.
#[derive(Debug)]
pub struct VirtualModel {
    store: RowStore,
    list: VirtualList,
}

impl VirtualModel {
    /// Build the list over `records`.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        let mut ids = WidgetIds::new();
        let store: RowStore = records.into_iter().collect();
        let mut list = VirtualList::new(ids.next_id(), VISIBLE_ROWS);
        list.set_item_count(store.len());
        Self { store, list }
    }

    /// Dispatch table for this model's widgets.
    #[must_use]
    pub fn bindings(&self) -> Bindings<VirtualMsg> {
        let id = self.list.id();
        Bindings::new()
            .with(id, EventKind::ColumnClicked, |ev| match ev.kind {
                InputKind::ColumnClicked(col) => Some(VirtualMsg::HeaderClicked(col)),
                _ => None,
            })
            .with(id, EventKind::RowSelected, |ev| match ev.kind {
                InputKind::RowSelected(row) => Some(VirtualMsg::RowSelected(row)),
                _ => None,
            })
            .with(id, EventKind::EditStarted, |ev| match ev.kind {
                InputKind::EditStarted(row) => Some(VirtualMsg::EditStarted(row)),
                _ => None,
            })
    }

    /// The record store.
    #[must_use]
    pub fn store(&self) -> &RowStore {
        &self.store
    }

    /// The list widget.
    #[must_use]
    pub fn list(&self) -> &VirtualList {
        &self.list
    }

    /// Ids in store order.
    #[must_use]
    pub fn ids(&self) -> Vec<i64> {
        self.store.iter().map(|(_, record)| record.id).collect()
    }
}

impl Model for VirtualModel {
    type Message = VirtualMsg;

    fn update(&mut self, msg: VirtualMsg) -> Cmd<VirtualMsg> {
        match msg {
            VirtualMsg::HeaderClicked(col) => {
                let Some(column) = SortColumn::from_index(col) else {
                    return Cmd::none();
                };
                self.store.sort_by(column, SortDirection::Ascending);
                self.list
                    .set_sort_indicator(Some((column, SortDirection::Ascending)));
                debug!(?column, "virtual list sorted");
                Cmd::post(VirtualMsg::Refresh)
            }
            VirtualMsg::RowSelected(row) => Cmd::log(format!("item {row} selected")),
            VirtualMsg::EditStarted(row) => Cmd::log(format!("edit label {row}")),
            VirtualMsg::Refresh => {
                self.list.set_item_count(self.store.len());
                Cmd::none()
            }
        }
    }

    fn view(&self) -> String {
        self.list.render(&self.store)
    }
}

/// Runnable virtual list sample.
#[derive(Debug)]
pub struct VirtualListSample {
    program: Program<VirtualModel>,
}

impl VirtualListSample {
    /// Create the sample over the seed records.
    #[must_use]
    pub fn new() -> Self {
        let model = VirtualModel::new(seed_records());
        let bindings = model.bindings();
        let mut program = Program::new(model, bindings);
        feed(&mut program, None);
        Self { program }
    }

    /// The model.
    #[must_use]
    pub fn model(&self) -> &VirtualModel {
        self.program.model()
    }
}

impl Default for VirtualListSample {
    fn default() -> Self {
        Self::new()
    }
}

impl Sample for VirtualListSample {
    fn name(&self) -> &'static str {
        "virtual-list"
    }

    fn usage(&self) -> &'static str {
        "click COL | scroll N | select ROW | edit ROW | quit"
    }

    fn execute(&mut self, verb: &str, arg: &str) -> Result<(), CommandError> {
        let model = self.program.model_mut();
        let event = match verb {
            "click" => {
                let col = index_arg(verb, arg)?;
                Some(
                    model
                        .list
                        .click_header(col)
                        .ok_or_else(|| no_such_target(verb, col))?,
                )
            }
            "scroll" => {
                model.list.scroll(int_arg(verb, arg)?);
                None
            }
            "select" => {
                let row = index_arg(verb, arg)?;
                Some(
                    model
                        .list
                        .select(row)
                        .ok_or_else(|| no_such_target(verb, row))?,
                )
            }
            "edit" => {
                let row = index_arg(verb, arg)?;
                Some(
                    model
                        .list
                        .begin_edit(row)
                        .ok_or_else(|| no_such_target(verb, row))?,
                )
            }
            other => return Err(unknown(other)),
        };
        feed(&mut self.program, event);
        Ok(())
    }

    fn view(&self) -> String {
        self.program.view()
    }

    fn is_running(&self) -> bool {
        self.program.is_running()
    }

    fn quit(&mut self) {
        self.program.quit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_click_sorts_ascending_every_time() {
        let mut s = VirtualListSample::new();
        s.execute("click", "0").unwrap();
        assert_eq!(s.model().ids(), vec![8, 10, 20, 25]);
        s.execute("click", "0").unwrap();
        assert_eq!(s.model().ids(), vec![8, 10, 20, 25]);
        s.execute("click", "1").unwrap();
        assert_eq!(s.model().ids(), vec![20, 25, 8, 10]);
    }

    #[test]
    fn visible_cells_track_store() {
        let mut s = VirtualListSample::new();
        s.execute("click", "0").unwrap();
        let m = s.model();
        assert_eq!(m.list().visible_range(), 0..VISIBLE_ROWS);
        for row in m.list().visible_range() {
            let expected = m.store().row(row).unwrap().cell(SortColumn::Id);
            assert_eq!(m.list().item_text(m.store(), row, 0), Some(expected));
        }
    }

    #[test]
    fn scroll_and_select() {
        let mut s = VirtualListSample::new();
        s.execute("scroll", "5").unwrap();
        assert_eq!(s.model().list().scroll_offset(), 1);
        s.execute("select", "2").unwrap();
        assert_eq!(s.model().list().selected(), Some(2));
        s.execute("edit", "3").unwrap();
        assert!(s.execute("edit", "4").is_err());
    }

    #[test]
    fn view_has_footer() {
        let s = VirtualListSample::new();
        assert!(s.view().ends_with("rows 1-3 of 4"));
    }
}
