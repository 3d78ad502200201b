#![forbid(unsafe_code)]

//! List rows: the record arena and how it is ordered.

pub mod sort;
pub mod store;

pub use sort::{SortColumn, SortDirection, SortToggle, compare, compare_directed};
pub use store::{Record, RecordKey, RowStore};
