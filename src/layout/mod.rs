pub mod accessibility;
pub mod buffer;
pub mod highlight;
pub mod labels;
pub mod rect_builder;

pub use accessibility::{AccessibilityElement, AccessibilityOrder};
pub use buffer::{BarBuffer, BarBufferPool};
pub use highlight::{HighlightRequest, ResolvedHighlight, resolve_highlight};
pub use labels::{
    DecimalFormatter, LabelOptions, LabelPass, ValueFormatter, ValueLabel, place_series_labels,
};
pub use rect_builder::feed_series_rects;
