use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::layout::LabelOptions;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    #[serde(default = "default_true")]
    pub draw_value_above_bar: bool,
    /// Let labels near the viewport edge fall back to the opposite side of
    /// the bar instead of rendering off-screen.
    #[serde(default)]
    pub side_flexible_labels: bool,
    /// Highlighting a stack segment selects the whole bar's extent.
    #[serde(default)]
    pub highlight_full_bar: bool,
    #[serde(default = "default_true")]
    pub contrast_guard: bool,
    /// Pull bar extents back to the visible value-axis range before drawing.
    #[serde(default = "default_true")]
    pub clip_bars_to_axis_range: bool,
    #[serde(default = "default_value_offset")]
    pub value_offset_px: f64,
    #[serde(default)]
    pub icon_offset_x_px: f64,
    #[serde(default)]
    pub icon_offset_y_px: f64,
}

fn default_true() -> bool {
    true
}

fn default_value_offset() -> f64 {
    4.5
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            draw_value_above_bar: true,
            side_flexible_labels: false,
            highlight_full_bar: false,
            contrast_guard: true,
            clip_bars_to_axis_range: true,
            value_offset_px: default_value_offset(),
            icon_offset_x_px: 0.0,
            icon_offset_y_px: 0.0,
        }
    }
}

impl BarChartConfig {
    pub fn validate(&self) -> ChartResult<()> {
        self.label_options().validate()
    }

    #[must_use]
    pub(crate) fn label_options(&self) -> LabelOptions {
        LabelOptions {
            draw_value_above_bar: self.draw_value_above_bar,
            side_flexible: self.side_flexible_labels,
            contrast_guard: self.contrast_guard,
            value_offset_px: self.value_offset_px,
            icon_offset_x_px: self.icon_offset_x_px,
            icon_offset_y_px: self.icon_offset_y_px,
        }
    }

    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidData(format!("failed to serialize config: {err}")))
    }

    pub fn from_json(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("failed to parse config: {err}")))?;
        config.validate()?;
        Ok(config)
    }
}
