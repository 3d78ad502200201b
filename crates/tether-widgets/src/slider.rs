#![forbid(unsafe_code)]

//! Horizontal slider over an integer range.
//!
//! The slider keeps its own thumb position. Dragging moves the thumb and
//! emits [`InputKind::Dragged`](tether_core::InputKind::Dragged); the model
//! decides what to store and the slider only learns the outcome through
//! [`ValueSurface::pull`].

use tether_core::error::PullError;
use tether_core::event::InputEvent;
use tether_core::id::WidgetId;
use tether_runtime::reactive::{BoundedValue, Bounds};
use tracing::trace;

use crate::{Surface, ValueSurface};

/// Default track width in cells.
pub const DEFAULT_TRACK_WIDTH: usize = 21;

/// Integer slider.
#[derive(Debug, Clone)]
pub struct Slider {
    id: WidgetId,
    range: Bounds,
    position: i64,
    track_width: usize,
}

impl Slider {
    /// Create a slider over `range` with the thumb at `initial` (clamped).
    #[must_use]
    pub fn new(id: WidgetId, range: Bounds, initial: i64) -> Self {
        Self {
            id,
            range,
            position: range.clamp(initial),
            track_width: DEFAULT_TRACK_WIDTH,
        }
    }

    /// Set the track width (at least 2 cells).
    #[must_use]
    pub fn with_track_width(mut self, width: usize) -> Self {
        self.track_width = width.max(2);
        self
    }

    /// The slider's own range.
    #[must_use]
    pub fn range(&self) -> Bounds {
        self.range
    }

    /// Thumb position.
    #[must_use]
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Drag the thumb to `value`, clamped to the slider's range.
    pub fn drag_to(&mut self, value: i64) -> InputEvent {
        self.position = self.range.clamp(value);
        trace!(id = %self.id, position = self.position, "slider dragged");
        InputEvent::dragged(self.id, self.position)
    }

    /// Move the thumb by `delta` (keyboard arrows, page keys).
    pub fn step(&mut self, delta: i64) -> InputEvent {
        self.drag_to(self.position.saturating_add(delta))
    }

    fn thumb_cell(&self) -> usize {
        let span = self.range.max().abs_diff(self.range.min());
        if span == 0 {
            return 0;
        }
        let offset = self.position.abs_diff(self.range.min());
        let cells = (self.track_width - 1) as u128;
        (u128::from(offset) * cells / u128::from(span)) as usize
    }
}

impl Surface for Slider {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn render(&self) -> String {
        let thumb = self.thumb_cell();
        let track: String = (0..self.track_width)
            .map(|cell| match cell.cmp(&thumb) {
                std::cmp::Ordering::Less => '=',
                std::cmp::Ordering::Equal => 'o',
                std::cmp::Ordering::Greater => '-',
            })
            .collect();
        format!(
            "{} [{track}] {}  = {}",
            self.range.min(),
            self.range.max(),
            self.position
        )
    }
}

impl ValueSurface for Slider {
    fn pull(&mut self, value: &BoundedValue) -> Result<(), PullError> {
        let v = value.get();
        if !self.range.contains(v) {
            return Err(PullError::new(
                self.id,
                format!(
                    "value {v} outside slider range [{}, {}]",
                    self.range.min(),
                    self.range.max()
                ),
            ));
        }
        self.position = v;
        Ok(())
    }
}
