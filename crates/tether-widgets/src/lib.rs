#![forbid(unsafe_code)]

//! Display surfaces for tether.
//!
//! Widgets are plain values that render to text. They emit
//! [`InputEvent`](tether_core::InputEvent)s when the user acts on them and
//! refresh from the model only when asked to. Refreshing never emits an
//! event, so a surface cannot re-trigger the change that refreshed it.
//!
//! | Widget | Emits | Refreshes from |
//! |--------|-------|----------------|
//! | [`Slider`] | `Dragged` | [`ValueSurface::pull`] |
//! | [`TextField`] | `TextCommitted`, `FocusLost` | [`ValueSurface::pull`] |
//! | [`Button`] | `Activated` | nothing |
//! | [`ListView`] | `ColumnClicked`, `RowSelected` | [`ListView::refresh`] |
//! | [`VirtualList`] | `ColumnClicked`, `RowSelected`, `EditStarted` | draws from the store |
//! | [`TriangleCanvas`] | `Activated` (click) | [`TriangleCanvas::pull`] |

use tether_core::error::PullError;
use tether_core::id::WidgetId;
use tether_runtime::reactive::BoundedValue;

pub mod button;
pub mod canvas;
pub mod list_view;
pub mod slider;
mod table;
pub mod text;
pub mod text_field;
pub mod virtual_list;

pub use button::Button;
pub use canvas::TriangleCanvas;
pub use list_view::ListView;
pub use slider::Slider;
pub use text_field::TextField;
pub use virtual_list::VirtualList;

/// Something that can be drawn as text.
pub trait Surface {
    /// The widget's id.
    fn id(&self) -> WidgetId;

    /// Current presentation.
    fn render(&self) -> String;
}

/// A surface subscribed to a bounded value.
pub trait ValueSurface: Surface {
    /// Re-read `value` and update the presentation.
    ///
    /// Must not emit input events.
    fn pull(&mut self, value: &BoundedValue) -> Result<(), PullError>;
}
