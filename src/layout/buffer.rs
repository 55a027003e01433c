use tracing::debug;

use crate::core::{BarDataSet, PixelRect, ValueRect, ValueTransformer};
use crate::error::{ChartError, ChartResult};

/// Frame-scoped rectangle storage for one series.
///
/// `values` holds axis-space rects written by the rect builder, `pixels` the
/// batch-transformed pixel-space rects, both at the series' required capacity.
/// `fed` counts how many slots the current frame actually wrote; partial
/// reveal (`phase_x < 1`) feeds a prefix of the capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct BarBuffer {
    values: Vec<ValueRect>,
    pixels: Vec<PixelRect>,
    fed: usize,
}

impl BarBuffer {
    fn with_len(len: usize) -> Self {
        Self {
            values: vec![ValueRect::default(); len],
            pixels: vec![PixelRect::default(); len],
            fed: 0,
        }
    }

    fn set_len(&mut self, len: usize) {
        // Shrink truncates, grow zero-fills; contents are frame-scoped so
        // nothing of value is lost either way.
        self.values.resize(len, ValueRect::default());
        self.pixels.resize(len, PixelRect::default());
        self.fed = self.fed.min(len);
    }

    /// Capacity in rects, always `entry_count * max(1, stack_size)`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rects written by the current frame's feed pass.
    #[must_use]
    pub fn fed_len(&self) -> usize {
        self.fed
    }

    #[must_use]
    pub fn value_rects(&self) -> &[ValueRect] {
        &self.values[..self.fed]
    }

    #[must_use]
    pub fn pixel_rects(&self) -> &[PixelRect] {
        &self.pixels[..self.fed]
    }

    pub(crate) fn begin_feed(&mut self) {
        self.fed = 0;
    }

    pub(crate) fn push(&mut self, series_index: usize, rect: ValueRect) -> ChartResult<()> {
        if self.fed >= self.values.len() {
            return Err(ChartError::BufferMismatch {
                series_index,
                required: self.fed + 1,
                actual: self.values.len(),
            });
        }
        self.values[self.fed] = rect;
        self.fed += 1;
        Ok(())
    }

    pub(crate) fn transform(&mut self, transformer: &ValueTransformer) -> ChartResult<()> {
        transformer.buffer_to_pixels(&self.values, &mut self.pixels, self.fed)
    }

    /// Fail-loud invariant check before any read pass.
    pub fn ensure_capacity(&self, series_index: usize, required: usize) -> ChartResult<()> {
        if self.values.len() != required {
            return Err(ChartError::BufferMismatch {
                series_index,
                required,
                actual: self.values.len(),
            });
        }
        Ok(())
    }
}

/// Arena of per-series buffers, owned exclusively by the engine.
///
/// Resized explicitly when series count or sizing changes, never implicitly
/// mid-computation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarBufferPool {
    buffers: Vec<BarBuffer>,
}

impl BarBufferPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures exactly one buffer per series, each at its required capacity.
    pub fn resize(&mut self, data_sets: &[BarDataSet]) {
        let old_count = self.buffers.len();
        self.buffers.truncate(data_sets.len());
        for (index, set) in data_sets.iter().enumerate() {
            let required = set.required_buffer_len();
            match self.buffers.get_mut(index) {
                Some(buffer) => {
                    if buffer.len() != required {
                        buffer.set_len(required);
                    }
                }
                None => self.buffers.push(BarBuffer::with_len(required)),
            }
        }
        if old_count != self.buffers.len() {
            debug!(
                series_before = old_count,
                series_after = self.buffers.len(),
                "bar buffer pool resized"
            );
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    #[must_use]
    pub fn buffer(&self, series_index: usize) -> Option<&BarBuffer> {
        self.buffers.get(series_index)
    }

    /// Mutable access for feed passes. Hosts normally go through
    /// `BarChartEngine` instead of feeding buffers directly.
    pub fn buffer_mut(&mut self, series_index: usize) -> Option<&mut BarBuffer> {
        self.buffers.get_mut(series_index)
    }

    /// Verifies one buffer per series at the required capacity.
    pub fn ensure_sized(&self, data_sets: &[BarDataSet]) -> ChartResult<()> {
        if self.buffers.len() != data_sets.len() {
            return Err(ChartError::ContractViolation(format!(
                "buffer pool holds {} buffers for {} series; resize the pool first",
                self.buffers.len(),
                data_sets.len()
            )));
        }
        for (index, set) in data_sets.iter().enumerate() {
            self.buffers[index].ensure_capacity(index, set.required_buffer_len())?;
        }
        Ok(())
    }
}
