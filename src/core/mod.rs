pub mod data_set;
pub mod entry;
pub mod transform;
pub mod types;

pub use data_set::{BarChartData, BarDataSet, BarStyle};
pub use entry::{BarEntry, IconRef, StackRange, StackValues};
pub use transform::ValueTransformer;
pub use types::{AnimationPhases, PixelRect, ValueRect, Viewport};
