mod engine;
mod engine_config;

pub use engine::{BarChartEngine, DrawStats};
pub use engine_config::BarChartConfig;
