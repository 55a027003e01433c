use tracing::{debug, trace};

use crate::core::{AnimationPhases, BarChartData, PixelRect, ValueRect, ValueTransformer};
use crate::error::{ChartError, ChartResult};
use crate::layout::{
    AccessibilityElement, AccessibilityOrder, BarBuffer, BarBufferPool, HighlightRequest,
    LabelPass, ResolvedHighlight, ValueFormatter, feed_series_rects, place_series_labels,
    resolve_highlight,
};
use crate::render::{DrawSurface, RectPrimitive, TextHAlign, TextPrimitive};

use super::BarChartConfig;

/// Per-pass draw counters, mainly for tests and tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawStats {
    pub bars_drawn: usize,
    pub borders_drawn: usize,
    pub labels_drawn: usize,
    pub icons_drawn: usize,
}

/// Bar geometry and highlight engine.
///
/// Owns the per-series rect buffers exclusively; all passes are synchronous
/// recomputations from the inputs of the current frame. The host drives one
/// frame as `prepare` -> `build_geometry` -> any of the draw/label/highlight
/// passes, supplying animation phases explicitly each call.
#[derive(Debug)]
pub struct BarChartEngine {
    config: BarChartConfig,
    buffers: BarBufferPool,
}

impl BarChartEngine {
    pub fn new(config: BarChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            buffers: BarBufferPool::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: BarChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Sizes one buffer per series. Must run before any other pass whenever
    /// series count or sizing may have changed.
    pub fn prepare(&mut self, data: &BarChartData) {
        self.buffers.resize(data.data_sets());
        debug!(series = data.data_sets().len(), "bar chart engine prepared");
    }

    /// Read access to a series' frame buffers, for hosts that consume the
    /// pixel rects directly. Contents are frame-scoped; do not retain.
    #[must_use]
    pub fn buffer(&self, series_index: usize) -> Option<&BarBuffer> {
        self.buffers.buffer(series_index)
    }

    /// Feeds axis-space rects for every series and batch-transforms them to
    /// pixel space. Fails loudly when `prepare` was not run for this data.
    pub fn build_geometry(
        &mut self,
        data: &BarChartData,
        transformer: &ValueTransformer,
        phases: AnimationPhases,
    ) -> ChartResult<()> {
        self.buffers.ensure_sized(data.data_sets())?;

        let half_width = data.half_bar_width();
        let axis_range = self
            .config
            .clip_bars_to_axis_range
            .then(|| transformer.value_axis_range());

        for (series_index, set) in data.data_sets().iter().enumerate() {
            let Some(buffer) = self.buffers.buffer_mut(series_index) else {
                return Err(missing_buffer(series_index));
            };
            feed_series_rects(
                series_index,
                set,
                half_width,
                phases,
                transformer.inverted(),
                axis_range,
                buffer,
            )?;
            buffer.transform(transformer)?;
        }

        trace!(
            phase_x = phases.x(),
            phase_y = phases.y(),
            "bar geometry rebuilt"
        );
        Ok(())
    }

    /// Emits fill/stroke commands for every visible bar rect.
    pub fn draw_bars(
        &self,
        data: &BarChartData,
        transformer: &ValueTransformer,
        surface: &mut dyn DrawSurface,
    ) -> ChartResult<DrawStats> {
        self.buffers.ensure_sized(data.data_sets())?;

        let viewport = transformer.viewport();
        let mut stats = DrawStats::default();

        for (series_index, set) in data.data_sets().iter().enumerate() {
            let style = set.style();
            let Some(buffer) = self.buffers.buffer(series_index) else {
                return Err(missing_buffer(series_index));
            };

            for (rect_index, rect) in buffer.pixel_rects().iter().enumerate() {
                if !viewport.is_in_bounds_left(rect.right()) {
                    break;
                }
                if !viewport.is_in_bounds_right(rect.x) {
                    continue;
                }

                let fill = RectPrimitive {
                    rect: *rect,
                    color: set.color_at(rect_index),
                    stroke_width: 0.0,
                    corner_radius: style.corner_radius,
                };
                if style.corner_radius > 0.0 {
                    surface.fill_rounded_rect(&fill)?;
                } else {
                    surface.fill_rect(&fill)?;
                }
                stats.bars_drawn += 1;

                if style.border_width > 0.0 {
                    let outline = inset_rect(*rect, style.outline_inset_px);
                    surface.stroke_rect(&RectPrimitive::stroked(
                        outline,
                        style.border_color,
                        style.border_width,
                    ))?;
                    stats.borders_drawn += 1;
                }
            }
        }

        Ok(stats)
    }

    /// Computes label and icon placement decisions for every series.
    pub fn place_labels(
        &self,
        data: &BarChartData,
        transformer: &ValueTransformer,
        phases: AnimationPhases,
        formatter: Option<&dyn ValueFormatter>,
    ) -> ChartResult<LabelPass> {
        self.buffers.ensure_sized(data.data_sets())?;

        let mut pass = LabelPass::default();
        for (series_index, set) in data.data_sets().iter().enumerate() {
            let Some(buffer) = self.buffers.buffer(series_index) else {
                return Err(missing_buffer(series_index));
            };
            place_series_labels(
                series_index,
                set,
                buffer,
                transformer.viewport(),
                transformer.inverted(),
                phases,
                self.config.label_options(),
                formatter,
                &mut pass,
            )?;
        }
        Ok(pass)
    }

    /// Places and immediately draws labels and icons.
    pub fn draw_labels(
        &self,
        data: &BarChartData,
        transformer: &ValueTransformer,
        phases: AnimationPhases,
        formatter: Option<&dyn ValueFormatter>,
        surface: &mut dyn DrawSurface,
    ) -> ChartResult<DrawStats> {
        let pass = self.place_labels(data, transformer, phases, formatter)?;
        let mut stats = DrawStats::default();

        for label in &pass.labels {
            let font_size_px = data
                .data_set(label.data_set_index)
                .map_or(11.0, |set| set.style().value_font_size_px);
            surface.draw_text(&TextPrimitive::new(
                label.text.clone(),
                label.x,
                label.y,
                font_size_px,
                label.color,
                TextHAlign::Center,
            ))?;
            stats.labels_drawn += 1;
        }
        for icon in &pass.icons {
            surface.draw_icon(icon)?;
            stats.icons_drawn += 1;
        }
        Ok(stats)
    }

    /// Resolves a highlight request; a miss yields `Ok(None)`.
    pub fn resolve_highlight(
        &self,
        data: &BarChartData,
        request: &HighlightRequest,
        transformer: &ValueTransformer,
        phases: AnimationPhases,
    ) -> ChartResult<Option<ResolvedHighlight>> {
        resolve_highlight(
            data,
            request,
            transformer,
            phases,
            self.config.highlight_full_bar,
        )
    }

    /// Resolves and fills the highlight rect. Returns whether anything drew.
    pub fn draw_highlight(
        &self,
        data: &BarChartData,
        request: &HighlightRequest,
        transformer: &ValueTransformer,
        phases: AnimationPhases,
        surface: &mut dyn DrawSurface,
    ) -> ChartResult<Option<ResolvedHighlight>> {
        let Some(resolved) = self.resolve_highlight(data, request, transformer, phases)? else {
            return Ok(None);
        };
        surface.fill_rect(&RectPrimitive::filled(resolved.rect, resolved.color))?;
        Ok(Some(resolved))
    }

    /// Builds the logical reading order: category-major, series-minor.
    ///
    /// Element frames use the uncorrected full-bar extent regardless of the
    /// clip setting.
    pub fn accessibility_elements(
        &self,
        data: &BarChartData,
        transformer: &ValueTransformer,
        phases: AnimationPhases,
    ) -> ChartResult<Vec<AccessibilityElement>> {
        let mut order = AccessibilityOrder::new();
        order.rebuild(data.max_entry_count(), data.data_sets().len());

        let half_width = data.half_bar_width();
        for (series_index, set) in data.data_sets().iter().enumerate() {
            let revealed = phases.revealed_count(set.entry_count());
            for (entry_index, entry) in set.entries()[..revealed].iter().enumerate() {
                let frame = transformer.rect_to_pixel_with_phase(
                    ValueRect::new(
                        entry.x() - half_width,
                        entry.positive_sum(),
                        entry.x() + half_width,
                        -entry.negative_sum(),
                    ),
                    phases.y(),
                );
                order.insert(AccessibilityElement {
                    data_set_index: series_index,
                    entry_index,
                    series_label: set.label().to_owned(),
                    x: entry.x(),
                    value: entry.y(),
                    frame,
                })?;
            }
        }
        Ok(order.into_ordered())
    }
}

fn missing_buffer(series_index: usize) -> ChartError {
    ChartError::ContractViolation(format!(
        "no buffer allocated for series {series_index}; `prepare` must run first"
    ))
}

fn inset_rect(rect: PixelRect, inset: f64) -> PixelRect {
    let inset = inset.min(rect.width * 0.5).min(rect.height * 0.5);
    PixelRect {
        x: rect.x + inset,
        y: rect.y + inset,
        width: (rect.width - 2.0 * inset).max(0.0),
        height: (rect.height - 2.0 * inset).max(0.0),
    }
}
