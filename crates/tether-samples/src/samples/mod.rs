#![forbid(unsafe_code)]

//! The four samples and how to build one from options.

pub mod binding;
pub mod list;
pub mod triangle;
pub mod virtual_list;

use tether_runtime::reactive::Bounds;

use crate::cli::{SampleKind, SampleOptions};
use crate::host::Sample;

pub use binding::BindingSample;
pub use list::ListSample;
pub use triangle::TriangleSample;
pub use virtual_list::VirtualListSample;

/// Build the sample selected by `options`.
#[must_use]
pub fn build(options: &SampleOptions) -> Box<dyn Sample> {
    match options.sample {
        SampleKind::Binding => Box::new(BindingSample::new(
            Bounds::new(options.min, options.max),
            options.initial,
        )),
        SampleKind::List => Box::new(ListSample::new()),
        SampleKind::VirtualList => Box::new(VirtualListSample::new()),
        SampleKind::Triangle => Box::new(TriangleSample::new()),
    }
}
