//! barchart-rs: bar-chart geometry and highlight engine.
//!
//! This crate turns numeric data series into screen-space rectangles under
//! animation, stacking, axis inversion and viewport clipping. Drawing stays
//! behind the [`render::DrawSurface`] capability trait so the geometry engine
//! never touches a concrete graphics context.

pub mod api;
pub mod core;
pub mod error;
pub mod layout;
pub mod render;
pub mod telemetry;

pub use api::{BarChartConfig, BarChartEngine};
pub use error::{ChartError, ChartResult};
