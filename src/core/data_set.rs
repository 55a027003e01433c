use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::core::BarEntry;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Per-series visual attributes, read-only inputs to the geometry engine.
#[derive(Debug, Clone, PartialEq)]
pub struct BarStyle {
    /// Fill colors, cycled per entry index.
    pub colors: Vec<Color>,
    pub border_color: Color,
    pub border_width: f64,
    pub corner_radius: f64,
    pub highlight_color: Color,
    pub highlight_alpha: f64,
    /// Inset applied to the stroked outline so borders stay inside the bar.
    pub outline_inset_px: f64,
    pub value_text_color: Color,
    /// Text color used when a label falls back to the opposite side.
    pub value_text_color_secondary: Color,
    pub value_font_size_px: f64,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            colors: vec![Color::rgb(0.30, 0.55, 0.85)],
            border_color: Color::rgb(0.15, 0.15, 0.15),
            border_width: 0.0,
            corner_radius: 0.0,
            highlight_color: Color::rgba(0.0, 0.0, 0.0, 1.0),
            highlight_alpha: 0.35,
            outline_inset_px: 0.0,
            value_text_color: Color::rgb(0.1, 0.1, 0.1),
            value_text_color_secondary: Color::rgb(0.95, 0.95, 0.95),
            value_font_size_px: 11.0,
        }
    }
}

impl BarStyle {
    pub fn validate(&self) -> ChartResult<()> {
        if self.colors.is_empty() {
            return Err(ChartError::InvalidData(
                "bar style requires at least one fill color".to_owned(),
            ));
        }
        for color in &self.colors {
            color.validate()?;
        }
        self.border_color.validate()?;
        self.highlight_color.validate()?;
        self.value_text_color.validate()?;
        self.value_text_color_secondary.validate()?;

        for (name, value) in [
            ("border width", self.border_width),
            ("corner radius", self.corner_radius),
            ("outline inset", self.outline_inset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "bar style {name} must be finite and >= 0"
                )));
            }
        }
        if !self.highlight_alpha.is_finite() || !(0.0..=1.0).contains(&self.highlight_alpha) {
            return Err(ChartError::InvalidData(
                "highlight alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !self.value_font_size_px.is_finite() || self.value_font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "value font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One ordered series of bar entries plus its style and feature flags.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDataSet {
    label: String,
    entries: Vec<BarEntry>,
    stack_size: usize,
    style: BarStyle,
    draw_values: bool,
    draw_icons: bool,
    highlight_enabled: bool,
    metadata: IndexMap<String, String>,
}

impl BarDataSet {
    /// Entries must be x-monotonic (non-decreasing); viewport culling and the
    /// nearest-entry lookup rely on that ordering.
    pub fn new(label: impl Into<String>, entries: Vec<BarEntry>) -> ChartResult<Self> {
        if entries
            .windows(2)
            .any(|pair| pair[0].x() > pair[1].x())
        {
            return Err(ChartError::ContractViolation(
                "bar entries must be ordered by non-decreasing x".to_owned(),
            ));
        }

        let stack_size = entries
            .iter()
            .map(BarEntry::segment_count)
            .max()
            .unwrap_or(1);

        Ok(Self {
            label: label.into(),
            entries,
            stack_size,
            style: BarStyle::default(),
            draw_values: true,
            draw_icons: true,
            highlight_enabled: true,
            metadata: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn with_style(mut self, style: BarStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_draw_values(mut self, enabled: bool) -> Self {
        self.draw_values = enabled;
        self
    }

    #[must_use]
    pub fn with_draw_icons(mut self, enabled: bool) -> Self {
        self.draw_icons = enabled;
        self
    }

    #[must_use]
    pub fn with_highlight_enabled(mut self, enabled: bool) -> Self {
        self.highlight_enabled = enabled;
        self
    }

    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.metadata
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn entries(&self) -> &[BarEntry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&BarEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Maximum segment count across entries; 1 for scalar series.
    #[must_use]
    pub fn stack_size(&self) -> usize {
        self.stack_size
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.stack_size > 1
    }

    #[must_use]
    pub fn style(&self) -> &BarStyle {
        &self.style
    }

    #[must_use]
    pub fn draw_values(&self) -> bool {
        self.draw_values
    }

    #[must_use]
    pub fn draw_icons(&self) -> bool {
        self.draw_icons
    }

    #[must_use]
    pub fn highlight_enabled(&self) -> bool {
        self.highlight_enabled
    }

    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        self.style.colors[index % self.style.colors.len()]
    }

    /// Rect capacity this series needs in its buffer.
    #[must_use]
    pub fn required_buffer_len(&self) -> usize {
        self.entries.len() * self.stack_size.max(1)
    }

    /// Nearest-value search by x, tie-broken by closeness to `target_y`.
    ///
    /// Returns the entry index alongside the entry. `None` only for an empty
    /// series; interactive misses are the caller's concern.
    #[must_use]
    pub fn closest_entry_to(&self, target_x: f64, target_y: f64) -> Option<(usize, &BarEntry)> {
        self.entries
            .iter()
            .enumerate()
            .min_by_key(|(_, entry)| {
                (
                    OrderedFloat((entry.x() - target_x).abs()),
                    OrderedFloat((entry.y() - target_y).abs()),
                )
            })
            .map(|(index, entry)| (index, entry))
    }
}

/// Full input data for one chart: the series list plus the shared bar width
/// in category-axis units.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartData {
    data_sets: Vec<BarDataSet>,
    bar_width: f64,
}

impl BarChartData {
    pub fn new(data_sets: Vec<BarDataSet>, bar_width: f64) -> ChartResult<Self> {
        if !bar_width.is_finite() || bar_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "bar width must be finite and > 0".to_owned(),
            ));
        }
        for set in &data_sets {
            set.style().validate()?;
        }
        Ok(Self {
            data_sets,
            bar_width,
        })
    }

    #[must_use]
    pub fn data_sets(&self) -> &[BarDataSet] {
        &self.data_sets
    }

    #[must_use]
    pub fn data_set(&self, index: usize) -> Option<&BarDataSet> {
        self.data_sets.get(index)
    }

    #[must_use]
    pub fn bar_width(&self) -> f64 {
        self.bar_width
    }

    #[must_use]
    pub fn half_bar_width(&self) -> f64 {
        self.bar_width * 0.5
    }

    #[must_use]
    pub fn max_entry_count(&self) -> usize {
        self.data_sets
            .iter()
            .map(BarDataSet::entry_count)
            .max()
            .unwrap_or(0)
    }
}
