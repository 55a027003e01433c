use crate::core::{AnimationPhases, BarDataSet, BarEntry, PixelRect, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::layout::BarBuffer;
use crate::render::{Color, IconPrimitive};

/// Capability the host supplies to turn values into label text.
///
/// Absence of a formatter disables value labels for the pass; icons and bars
/// are unaffected.
pub trait ValueFormatter {
    fn format_value(&self, value: f64, entry: &BarEntry, data_set_index: usize) -> String;
}

/// Fixed-precision default formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalFormatter {
    pub decimals: usize,
}

impl ValueFormatter for DecimalFormatter {
    fn format_value(&self, value: f64, _entry: &BarEntry, _data_set_index: usize) -> String {
        format!("{value:.precision$}", precision = self.decimals)
    }
}

/// Placement tuning shared by the value and icon passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelOptions {
    /// Draw labels above positive bars (below when `false`).
    pub draw_value_above_bar: bool,
    /// Allow falling back to the opposite side when the preferred anchor
    /// leaves the vertical viewport.
    pub side_flexible: bool,
    /// Force an inverted text color when text and background are too close.
    pub contrast_guard: bool,
    /// Gap between bar edge and label baseline, in pixels.
    pub value_offset_px: f64,
    pub icon_offset_x_px: f64,
    pub icon_offset_y_px: f64,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            draw_value_above_bar: true,
            side_flexible: false,
            contrast_guard: true,
            value_offset_px: 4.5,
            icon_offset_x_px: 0.0,
            icon_offset_y_px: 0.0,
        }
    }
}

impl LabelOptions {
    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("value offset", self.value_offset_px),
            ("icon x offset", self.icon_offset_x_px),
            ("icon y offset", self.icon_offset_y_px),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "label {name} must be finite"
                )));
            }
        }
        Ok(())
    }
}

/// One resolved label decision: where to draw, what color, and whether the
/// anchor fell back to the opposite side of the bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueLabel {
    pub data_set_index: usize,
    pub entry_index: usize,
    pub stack_index: Option<usize>,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub color: Color,
    /// Bar color behind a side-fallback label; hosts use it for contrast
    /// decisions. `None` when the preferred side was kept.
    pub background_hint: Option<Color>,
}

/// Output of one value/icon placement pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelPass {
    pub labels: Vec<ValueLabel>,
    pub icons: Vec<IconPrimitive>,
}

/// Contrast threshold on the normalized perceptual color distance.
const CONTRAST_DISTANCE_MIN: f64 = 0.2;

struct SeriesLabelContext<'a> {
    series_index: usize,
    set: &'a BarDataSet,
    viewport: Viewport,
    options: LabelOptions,
    pos_offset: f64,
    neg_offset: f64,
    formatter: Option<&'a dyn ValueFormatter>,
}

/// Computes label and icon anchors for one series' visible rects.
///
/// The scan assumes x-monotonic entries: an entry entirely left of the
/// viewport terminates the series, one entirely right of it (or vertically
/// out of bounds) is skipped without terminating.
pub fn place_series_labels(
    series_index: usize,
    set: &BarDataSet,
    buffer: &BarBuffer,
    viewport: Viewport,
    inverted: bool,
    phases: AnimationPhases,
    options: LabelOptions,
    formatter: Option<&dyn ValueFormatter>,
    out: &mut LabelPass,
) -> ChartResult<()> {
    options.validate()?;
    buffer.ensure_capacity(series_index, set.required_buffer_len())?;

    if !set.draw_values() && !set.draw_icons() {
        return Ok(());
    }

    let text_height = set.style().value_font_size_px;
    let mut pos_offset = if options.draw_value_above_bar {
        -(text_height + options.value_offset_px)
    } else {
        options.value_offset_px
    };
    let mut neg_offset = if options.draw_value_above_bar {
        options.value_offset_px
    } else {
        -(text_height + options.value_offset_px)
    };
    if inverted {
        pos_offset = -pos_offset - text_height;
        neg_offset = -neg_offset - text_height;
    }

    let context = SeriesLabelContext {
        series_index,
        set,
        viewport,
        options,
        pos_offset,
        neg_offset,
        formatter,
    };

    let rects = buffer.pixel_rects();
    let revealed = phases.revealed_count(set.entry_count());
    let mut cursor = 0usize;

    for (entry_index, entry) in set.entries()[..revealed].iter().enumerate() {
        let segment_count = entry.segment_count();
        let Some(anchor_rect) = rects.get(cursor) else {
            break;
        };
        let x = anchor_rect.mid_x();

        if !viewport.is_in_bounds_left(x) {
            // x-monotonic entries: everything that follows is off-screen too.
            break;
        }
        if !viewport.is_in_bounds_right(x) || !viewport.is_in_bounds_y(anchor_rect.y) {
            cursor += segment_count;
            continue;
        }

        match entry.stack_values() {
            None => {
                place_entry_label(&context, entry_index, entry, entry.y(), None, rects[cursor], out);
                place_entry_icon(&context, entry, entry.y(), rects[cursor], out);
            }
            Some(values) => {
                for (stack_index, value) in values.iter().enumerate() {
                    let rect = rects[cursor + stack_index];
                    if !viewport.is_in_bounds_y(rect.y) {
                        continue;
                    }
                    place_entry_label(
                        &context,
                        entry_index,
                        entry,
                        *value,
                        Some(stack_index),
                        rect,
                        out,
                    );
                }
                place_entry_icon(&context, entry, entry.y(), rects[cursor], out);
            }
        }
        cursor += segment_count;
    }

    Ok(())
}

fn anchor_y(value: f64, rect: PixelRect, pos_offset: f64, neg_offset: f64) -> f64 {
    if value >= 0.0 {
        rect.y + pos_offset
    } else {
        rect.bottom() + neg_offset
    }
}

fn place_entry_label(
    context: &SeriesLabelContext<'_>,
    entry_index: usize,
    entry: &BarEntry,
    value: f64,
    stack_index: Option<usize>,
    rect: PixelRect,
    out: &mut LabelPass,
) {
    if !context.set.draw_values() {
        return;
    }
    let Some(formatter) = context.formatter else {
        return;
    };

    let style = context.set.style();
    let mut y = anchor_y(value, rect, context.pos_offset, context.neg_offset);
    let mut color = style.value_text_color;
    let mut background_hint = None;

    if context.options.side_flexible && !context.viewport.is_in_bounds_y(y) {
        // The preferred side would render off-screen; flip to the opposite
        // offset pair and report the bar color so hosts can re-check contrast.
        y = anchor_y(value, rect, context.neg_offset, context.pos_offset);
        color = style.value_text_color_secondary;
        background_hint = Some(context.set.color_at(entry_index));
    }

    if context.options.contrast_guard {
        let background = background_hint.unwrap_or_else(|| context.set.color_at(entry_index));
        if color.perceptual_distance(background) < CONTRAST_DISTANCE_MIN {
            color = color.inverted();
        }
    }

    out.labels.push(ValueLabel {
        data_set_index: context.series_index,
        entry_index,
        stack_index,
        text: formatter.format_value(value, entry, context.series_index),
        x: rect.mid_x(),
        y,
        color,
        background_hint,
    });
}

fn place_entry_icon(
    context: &SeriesLabelContext<'_>,
    entry: &BarEntry,
    value: f64,
    rect: PixelRect,
    out: &mut LabelPass,
) {
    if !context.set.draw_icons() {
        return;
    }
    let Some(icon) = entry.icon() else {
        return;
    };

    let x = rect.mid_x() + context.options.icon_offset_x_px;
    let y = anchor_y(value, rect, context.pos_offset, context.neg_offset)
        + context.options.icon_offset_y_px;
    out.icons.push(IconPrimitive::new(icon.clone(), x, y));
}
