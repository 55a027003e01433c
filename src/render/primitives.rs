use crate::core::PixelRect;
use crate::core::entry::IconRef;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Channel-inverted color at the same alpha.
    #[must_use]
    pub fn inverted(self) -> Self {
        Self::rgba(1.0 - self.red, 1.0 - self.green, 1.0 - self.blue, self.alpha)
    }

    /// Luma-weighted RGB distance, normalized to `[0, 1]`.
    ///
    /// A cheap legibility heuristic, not a WCAG contrast ratio. Alpha is
    /// ignored.
    #[must_use]
    pub fn perceptual_distance(self, other: Self) -> f64 {
        let dr = self.red - other.red;
        let dg = self.green - other.green;
        let db = self.blue - other.blue;
        (0.299 * dr * dr + 0.587 * dg * dg + 0.114 * db * db).sqrt()
    }
}

/// Draw command for one filled or stroked rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub rect: PixelRect,
    pub color: Color,
    /// Line width for stroke commands; ignored by fills.
    pub stroke_width: f64,
    /// Corner radius for rounded fills; 0 draws square corners.
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn filled(rect: PixelRect, color: Color) -> Self {
        Self {
            rect,
            color,
            stroke_width: 0.0,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn stroked(rect: PixelRect, color: Color, stroke_width: f64) -> Self {
        Self {
            rect,
            color,
            stroke_width,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn rounded(rect: PixelRect, color: Color, corner_radius: f64) -> Self {
        Self {
            rect,
            color,
            stroke_width: 0.0,
            corner_radius,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.rect.x.is_finite()
            || !self.rect.y.is_finite()
            || !self.rect.width.is_finite()
            || !self.rect.height.is_finite()
        {
            return Err(ChartError::InvalidData(
                "rect coordinates must be finite".to_owned(),
            ));
        }
        if self.rect.width < 0.0 || self.rect.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "rect stroke width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one host-resolved icon, centered at `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct IconPrimitive {
    pub icon: IconRef,
    pub x: f64,
    pub y: f64,
}

impl IconPrimitive {
    #[must_use]
    pub const fn new(icon: IconRef, x: f64, y: f64) -> Self {
        Self { icon, x, y }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "icon coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
