use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Inline storage for typical stack depths; spills for deep stacks.
pub type StackValues = SmallVec<[f64; 4]>;

/// Precomputed `[from, to)` value-axis span of one stack segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackRange {
    pub from: f64,
    pub to: f64,
}

/// Handle to a host-provided icon drawn at an entry's anchor.
///
/// The engine never decodes image data; it only positions the icon and hands
/// the reference back through the draw surface.
#[derive(Debug, Clone, PartialEq)]
pub struct IconRef {
    pub name: String,
    pub width_px: f64,
    pub height_px: f64,
}

impl IconRef {
    pub fn new(name: impl Into<String>, width_px: f64, height_px: f64) -> ChartResult<Self> {
        if !width_px.is_finite() || !height_px.is_finite() || width_px <= 0.0 || height_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "icon size must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            name: name.into(),
            width_px,
            height_px,
        })
    }
}

/// One bar entry: a category position plus either a scalar value or an
/// ordered sequence of signed stack segment values.
///
/// Derived sums and per-segment ranges are computed once at construction so
/// every per-frame pass reads them without re-accumulating.
#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    x: f64,
    y: f64,
    stack_values: Option<StackValues>,
    ranges: SmallVec<[StackRange; 4]>,
    positive_sum: f64,
    negative_sum: f64,
    icon: Option<IconRef>,
}

impl BarEntry {
    pub fn new(x: f64, y: f64) -> ChartResult<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "bar entry coordinates must be finite".to_owned(),
            ));
        }
        Ok(Self {
            x,
            y,
            stack_values: None,
            ranges: SmallVec::new(),
            positive_sum: y.max(0.0),
            negative_sum: (-y).max(0.0),
            icon: None,
        })
    }

    pub fn stacked(x: f64, values: &[f64]) -> ChartResult<Self> {
        if !x.is_finite() || values.iter().any(|v| !v.is_finite()) {
            return Err(ChartError::InvalidData(
                "bar entry coordinates must be finite".to_owned(),
            ));
        }
        if values.is_empty() {
            return Err(ChartError::InvalidData(
                "stacked bar entry requires at least one segment value".to_owned(),
            ));
        }

        let positive_sum: f64 = values.iter().filter(|v| **v >= 0.0).sum();
        let negative_sum: f64 = values.iter().filter(|v| **v < 0.0).map(|v| v.abs()).sum();

        // Segment ranges accumulate positive and negative totals independently,
        // so interleaved signs never shift each other's spans.
        let mut ranges = SmallVec::with_capacity(values.len());
        let mut pos_remain = 0.0_f64;
        let mut neg_remain = -negative_sum;
        for value in values {
            if *value < 0.0 {
                ranges.push(StackRange {
                    from: neg_remain,
                    to: neg_remain - value,
                });
                neg_remain -= value;
            } else {
                ranges.push(StackRange {
                    from: pos_remain,
                    to: pos_remain + value,
                });
                pos_remain += value;
            }
        }

        Ok(Self {
            x,
            y: values.iter().sum(),
            stack_values: Some(SmallVec::from_slice(values)),
            ranges,
            positive_sum,
            negative_sum,
            icon: None,
        })
    }

    #[must_use]
    pub fn with_icon(mut self, icon: IconRef) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Scalar value; for stacked entries this is the signed sum of segments.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.stack_values.is_some()
    }

    #[must_use]
    pub fn stack_values(&self) -> Option<&[f64]> {
        self.stack_values.as_deref()
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.stack_values.as_ref().map_or(1, |values| values.len())
    }

    #[must_use]
    pub fn positive_sum(&self) -> f64 {
        self.positive_sum
    }

    /// Sum of negative segment magnitudes; always >= 0.
    #[must_use]
    pub fn negative_sum(&self) -> f64 {
        self.negative_sum
    }

    #[must_use]
    pub fn range(&self, stack_index: usize) -> Option<StackRange> {
        self.ranges.get(stack_index).copied()
    }

    #[must_use]
    pub fn icon(&self) -> Option<&IconRef> {
        self.icon.as_ref()
    }
}
