use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// `false` when `x` lies entirely left of the visible content range.
    #[must_use]
    pub fn is_in_bounds_left(self, x: f64) -> bool {
        x >= 0.0
    }

    /// `false` when `x` lies entirely right of the visible content range.
    #[must_use]
    pub fn is_in_bounds_right(self, x: f64) -> bool {
        x <= f64::from(self.width)
    }

    #[must_use]
    pub fn is_in_bounds_y(self, y: f64) -> bool {
        y >= 0.0 && y <= f64::from(self.height)
    }
}

/// Axis-space rectangle, in data value units.
///
/// `left`/`right` are category-axis positions, `top`/`bottom` value-axis
/// positions. Which of `top`/`bottom` carries the greater value depends on the
/// value-axis orientation; the transformer resolves that when mapping to
/// pixels. Never mix this type with [`PixelRect`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ValueRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ValueRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }
}

/// Pixel-space rectangle, post-transform, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn mid_x(self) -> f64 {
        self.x + self.width * 0.5
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }
}

/// Caller-supplied animation progress for one frame.
///
/// `x` is the fraction of entries revealed left-to-right, `y` the fraction of
/// bar height grown. The engine never owns or advances these values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationPhases {
    x: f64,
    y: f64,
}

impl AnimationPhases {
    pub fn new(x: f64, y: f64) -> ChartResult<Self> {
        if !x.is_finite() || !y.is_finite() || !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y)
        {
            return Err(ChartError::InvalidData(
                "animation phases must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(Self { x, y })
    }

    /// Fully revealed, fully grown. The value to use when no animation runs.
    #[must_use]
    pub const fn full() -> Self {
        Self { x: 1.0, y: 1.0 }
    }

    #[must_use]
    pub fn x(self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> f64 {
        self.y
    }

    /// Number of entries revealed by the x phase, `ceil(count * phase_x)`.
    #[must_use]
    pub fn revealed_count(self, entry_count: usize) -> usize {
        let revealed = (entry_count as f64 * self.x).ceil() as usize;
        revealed.min(entry_count)
    }
}

impl Default for AnimationPhases {
    fn default() -> Self {
        Self::full()
    }
}
