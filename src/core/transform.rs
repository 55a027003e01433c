use crate::core::{PixelRect, ValueRect, Viewport};
use crate::error::{ChartError, ChartResult};

/// Maps axis-space geometry into pixel space for one frame.
///
/// The engine consumes this collaborator; it never derives axis ranges
/// itself. The category axis maps onto `[0, width]`, the value axis onto
/// `[0, height]` with the conventional screen orientation (larger values up)
/// unless `inverted` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueTransformer {
    viewport: Viewport,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    inverted: bool,
}

impl ValueTransformer {
    pub fn new(
        viewport: Viewport,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !x_min.is_finite() || !x_max.is_finite() || x_min == x_max {
            return Err(ChartError::InvalidData(
                "category axis range must be finite and non-empty".to_owned(),
            ));
        }
        if !y_min.is_finite() || !y_max.is_finite() || y_min == y_max {
            return Err(ChartError::InvalidData(
                "value axis range must be finite and non-empty".to_owned(),
            ));
        }
        Ok(Self {
            viewport,
            x_min,
            x_max,
            y_min,
            y_max,
            inverted: false,
        })
    }

    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    #[must_use]
    pub fn inverted(self) -> bool {
        self.inverted
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    /// Visible value-axis range, `(min, max)`. Drives the clip-offset pass.
    #[must_use]
    pub fn value_axis_range(self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    #[must_use]
    pub fn x_to_pixel(self, x: f64) -> f64 {
        let normalized = (x - self.x_min) / (self.x_max - self.x_min);
        normalized * f64::from(self.viewport.width)
    }

    #[must_use]
    pub fn y_to_pixel(self, y: f64) -> f64 {
        let normalized = (y - self.y_min) / (self.y_max - self.y_min);
        let height = f64::from(self.viewport.height);
        if self.inverted {
            normalized * height
        } else {
            (1.0 - normalized) * height
        }
    }

    /// Maps one axis-space rect to pixel space, normalizing edge order.
    #[must_use]
    pub fn rect_to_pixel(self, rect: ValueRect) -> PixelRect {
        let x1 = self.x_to_pixel(rect.left);
        let x2 = self.x_to_pixel(rect.right);
        let y1 = self.y_to_pixel(rect.top);
        let y2 = self.y_to_pixel(rect.bottom);

        PixelRect {
            x: x1.min(x2),
            y: y1.min(y2),
            width: (x2 - x1).abs(),
            height: (y2 - y1).abs(),
        }
    }

    /// Like [`Self::rect_to_pixel`] but grows the value edges by `phase_y`
    /// before mapping. Used by the highlight pass, whose extents come from
    /// entry sums rather than pre-phased buffer rects.
    #[must_use]
    pub fn rect_to_pixel_with_phase(self, mut rect: ValueRect, phase_y: f64) -> PixelRect {
        rect.top *= phase_y;
        rect.bottom *= phase_y;
        self.rect_to_pixel(rect)
    }

    /// Batch form: maps `values[..count]` into `pixels[..count]`.
    pub fn buffer_to_pixels(
        self,
        values: &[ValueRect],
        pixels: &mut [PixelRect],
        count: usize,
    ) -> ChartResult<()> {
        if count > values.len() || count > pixels.len() {
            return Err(ChartError::ContractViolation(format!(
                "batch transform of {count} rects exceeds buffer lengths ({}/{})",
                values.len(),
                pixels.len()
            )));
        }
        for (value, pixel) in values[..count].iter().zip(&mut pixels[..count]) {
            *pixel = self.rect_to_pixel(*value);
        }
        Ok(())
    }
}
