#![forbid(unsafe_code)]

//! Report list sorted by column header or a "Sort By ID" button.
//!
//! The store is authoritative: every sort reorders the [`RowStore`] and then
//! posts [`ListMsg::Refresh`], which re-projects the list. The header row and
//! the button each keep their own [`SortToggle`], so clicking one never flips
//! the direction the other will use next.

use tether_core::event::{EventKind, InputKind};
use tether_core::id::WidgetIds;
use tether_runtime::dispatch::Bindings;
use tether_runtime::program::{Cmd, Model, Program};
use tether_runtime::rows::{Record, RowStore, SortColumn, SortDirection, SortToggle};
use tether_widgets::{Button, ListView, Surface};
use tracing::debug;

use crate::host::{CommandError, Sample, feed, index_arg, no_such_target, unknown};

/// The four records every list sample starts with.
#[must_use]
pub fn seed_records() -> Vec<Record> {
    vec![
        Record::new(20, "A-Some Item------------", "foo"),
        Record::new(25, "B-Another Item----", "bar"),
        Record::new(10, "D-some item", "blob"),
        Record::new(8, "C-big", "max power"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMsg {
    HeaderClicked(usize),
    SortById,
    RowSelected(usize),
    RemoveSelected,
    /// Re-project the list from the store.
    Refresh,
}

/// Model for the list sample.
#[derive(Debug)]
pub struct ListModel {
    store: RowStore,
    list: ListView,
    sort_button: Button,
    remove_button: Button,
    header_toggle: SortToggle,
    button_toggle: SortToggle,
}

impl ListModel {
    /// Build the list over `records`.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        let mut ids = WidgetIds::new();
        let store: RowStore = records.into_iter().collect();
        let mut list = ListView::new(ids.next_id());
        list.refresh(&store);
        Self {
            store,
            list,
            sort_button: Button::new(ids.next_id(), "Sort By ID"),
            remove_button: Button::new(ids.next_id(), "Remove"),
            header_toggle: SortToggle::default(),
            button_toggle: SortToggle::default(),
        }
    }

    /// Dispatch table for this model's widgets.
    #[must_use]
    pub fn bindings(&self) -> Bindings<ListMsg> {
        Bindings::new()
            .with(self.list.id(), EventKind::ColumnClicked, |ev| match ev.kind {
                InputKind::ColumnClicked(col) => Some(ListMsg::HeaderClicked(col)),
                _ => None,
            })
            .with(self.list.id(), EventKind::RowSelected, |ev| match ev.kind {
                InputKind::RowSelected(row) => Some(ListMsg::RowSelected(row)),
                _ => None,
            })
            .with(self.sort_button.id(), EventKind::Activated, |_| {
                Some(ListMsg::SortById)
            })
            .with(self.remove_button.id(), EventKind::Activated, |_| {
                Some(ListMsg::RemoveSelected)
            })
    }

    /// The record store.
    #[must_use]
    pub fn store(&self) -> &RowStore {
        &self.store
    }

    /// The list widget.
    #[must_use]
    pub fn list(&self) -> &ListView {
        &self.list
    }

    /// Ids in the order the list currently shows them.
    #[must_use]
    pub fn shown_ids(&self) -> Vec<i64> {
        (0..self.list.len())
            .filter_map(|row| self.list.record(row, &self.store))
            .map(|record| record.id)
            .collect()
    }

    fn sort(&mut self, column: SortColumn, direction: SortDirection) -> Cmd<ListMsg> {
        self.store.sort_by(column, direction);
        self.list.set_sort_indicator(Some((column, direction)));
        debug!(?column, ?direction, "list sorted");
        Cmd::post(ListMsg::Refresh)
    }
}

impl Model for ListModel {
    type Message = ListMsg;

    fn update(&mut self, msg: ListMsg) -> Cmd<ListMsg> {
        match msg {
            ListMsg::HeaderClicked(col) => match SortColumn::from_index(col) {
                Some(column) => {
                    let direction = self.header_toggle.advance();
                    self.sort(column, direction)
                }
                None => Cmd::none(),
            },
            ListMsg::SortById => {
                let direction = self.button_toggle.advance();
                self.sort(SortColumn::Id, direction)
            }
            ListMsg::RowSelected(row) => match self.list.record(row, &self.store) {
                Some(record) => Cmd::log(format!("item {row} selected: id {}", record.id)),
                None => Cmd::none(),
            },
            ListMsg::RemoveSelected => {
                let removed = self
                    .list
                    .selected_key()
                    .and_then(|key| self.store.remove(key));
                match removed {
                    Some(record) => Cmd::batch(vec![
                        Cmd::log(format!("removed id {}", record.id)),
                        Cmd::post(ListMsg::Refresh),
                    ]),
                    None => Cmd::log("nothing selected to remove"),
                }
            }
            ListMsg::Refresh => {
                self.list.refresh(&self.store);
                Cmd::none()
            }
        }
    }

    fn view(&self) -> String {
        format!(
            "{}\n{} {}",
            self.list.render(),
            self.sort_button.render(),
            self.remove_button.render()
        )
    }
}

/// Runnable list sample.
#[derive(Debug)]
pub struct ListSample {
    program: Program<ListModel>,
}

impl ListSample {
    /// Create the sample over the seed records.
    #[must_use]
    pub fn new() -> Self {
        Self::with_records(seed_records())
    }

    /// Create the sample over `records`.
    #[must_use]
    pub fn with_records(records: Vec<Record>) -> Self {
        let model = ListModel::new(records);
        let bindings = model.bindings();
        let mut program = Program::new(model, bindings);
        feed(&mut program, None);
        Self { program }
    }

    /// The model.
    #[must_use]
    pub fn model(&self) -> &ListModel {
        self.program.model()
    }
}

impl Default for ListSample {
    fn default() -> Self {
        Self::new()
    }
}

impl Sample for ListSample {
    fn name(&self) -> &'static str {
        "list"
    }

    fn usage(&self) -> &'static str {
        "click COL | sort-id | select ROW | remove | quit"
    }

    fn execute(&mut self, verb: &str, arg: &str) -> Result<(), CommandError> {
        let model = self.program.model_mut();
        let event = match verb {
            "click" => {
                let col = index_arg(verb, arg)?;
                model
                    .list
                    .click_header(col)
                    .ok_or_else(|| no_such_target(verb, col))?
            }
            "sort-id" => model.sort_button.press(),
            "select" => {
                let row = index_arg(verb, arg)?;
                model
                    .list
                    .select(row)
                    .ok_or_else(|| no_such_target(verb, row))?
            }
            "remove" => model.remove_button.press(),
            other => return Err(unknown(other)),
        };
        feed(&mut self.program, Some(event));
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
