use crate::core::PixelRect;
use crate::error::{ChartError, ChartResult};

/// One screen-reader element: the logical bar of one entry in one series.
///
/// `frame` is the uncorrected full-bar extent; the clip-offset correction is
/// a draw-pass optimization and never shrinks what assistive tech reports.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessibilityElement {
    pub data_set_index: usize,
    pub entry_index: usize,
    pub series_label: String,
    pub x: f64,
    pub value: f64,
    pub frame: PixelRect,
}

/// Grid collecting elements as `[entry_index][series_index]` so traversal
/// reads left-to-right across categories before across series, even though
/// drawing order is per-series.
///
/// Rebuilt every pass; sized by the maximum entry count across series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessibilityOrder {
    slots: Vec<Vec<Option<AccessibilityElement>>>,
    series_count: usize,
}

impl AccessibilityOrder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rebuild(&mut self, max_entry_count: usize, series_count: usize) {
        self.series_count = series_count;
        self.slots.clear();
        self.slots
            .resize_with(max_entry_count, || vec![None; series_count]);
    }

    pub fn insert(&mut self, element: AccessibilityElement) -> ChartResult<()> {
        let entry_index = element.entry_index;
        let series_index = element.data_set_index;
        let Some(row) = self.slots.get_mut(entry_index) else {
            return Err(ChartError::ContractViolation(format!(
                "accessibility entry index {entry_index} exceeds grid of {} categories",
                self.slots.len()
            )));
        };
        let Some(slot) = row.get_mut(series_index) else {
            return Err(ChartError::ContractViolation(format!(
                "accessibility series index {series_index} exceeds grid of {} series",
                self.series_count
            )));
        };
        *slot = Some(element);
        Ok(())
    }

    /// Flattened category-major, series-minor reading order.
    #[must_use]
    pub fn into_ordered(self) -> Vec<AccessibilityElement> {
        self.slots
            .into_iter()
            .flat_map(|row| row.into_iter().flatten())
            .collect()
    }
}
