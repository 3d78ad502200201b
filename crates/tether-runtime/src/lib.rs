#![forbid(unsafe_code)]

//! Model side of tether: bounded values and their change relay, entry
//! validation, the dispatch table, the message loop, and list rows.
//!
//! Everything here is single-threaded. Input events enter a [`Program`],
//! are resolved to messages by [`Bindings`], and are handled in FIFO order.
//! Model changes that need views refreshed post a message to the back of
//! the same queue instead of refreshing inline.

pub mod dispatch;
pub mod program;
pub mod reactive;
pub mod rows;
pub mod validate;

pub use dispatch::Bindings;
pub use program::{Cmd, Model, Program, ProgramConfig};
pub use reactive::{BoundedValue, Bounds, ChangeRelay, Propagation, Resettable, SetPolicy};
pub use rows::{Record, RecordKey, RowStore, SortColumn, SortDirection, SortToggle};
pub use validate::{IntegerValidator, parse_integer};
