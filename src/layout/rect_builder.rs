use tracing::trace;

use crate::core::{AnimationPhases, BarDataSet, BarEntry, ValueRect};
use crate::error::ChartResult;
use crate::layout::BarBuffer;

/// Feeds one series' axis-space rects into its buffer.
///
/// Entries with index `>= ceil(entry_count * phase_x)` stay unrevealed this
/// frame. `value_axis_range` enables the clip-offset correction for simple
/// bars: extents beyond the visible value range are pulled back to the axis
/// boundary before drawing. Stacked segments are never clip-corrected; the
/// whole bar draws in one pass.
///
/// Re-invoking with identical inputs rewrites the buffer with identical rects.
pub fn feed_series_rects(
    series_index: usize,
    set: &BarDataSet,
    half_width: f64,
    phases: AnimationPhases,
    inverted: bool,
    value_axis_range: Option<(f64, f64)>,
    buffer: &mut BarBuffer,
) -> ChartResult<()> {
    buffer.ensure_capacity(series_index, set.required_buffer_len())?;
    buffer.begin_feed();

    let revealed = phases.revealed_count(set.entry_count());
    for entry in &set.entries()[..revealed] {
        match entry.stack_values() {
            None => feed_simple_bar(
                series_index,
                entry,
                half_width,
                phases.y(),
                inverted,
                value_axis_range,
                buffer,
            )?,
            Some(values) => feed_stacked_bar(
                series_index,
                entry,
                values,
                half_width,
                phases.y(),
                buffer,
            )?,
        }
    }

    trace!(
        series_index,
        revealed,
        fed = buffer.fed_len(),
        "series rects fed"
    );
    Ok(())
}

fn feed_simple_bar(
    series_index: usize,
    entry: &BarEntry,
    half_width: f64,
    phase_y: f64,
    inverted: bool,
    value_axis_range: Option<(f64, f64)>,
    buffer: &mut BarBuffer,
) -> ChartResult<()> {
    let x = entry.x();
    let y = entry.y();
    let left = x - half_width;
    let right = x + half_width;

    // Sign and inversion pick which edge is zero-anchored.
    let mut top = if inverted {
        if y <= 0.0 { y } else { 0.0 }
    } else if y >= 0.0 {
        y
    } else {
        0.0
    };
    let mut bottom = if inverted {
        if y >= 0.0 { y } else { 0.0 }
    } else if y <= 0.0 {
        y
    } else {
        0.0
    };

    // Shift off-screen excess back to the axis boundary so the draw pass does
    // not rasterize geometry the viewport clips anyway. Accessibility frames
    // intentionally bypass this and keep the uncorrected extent.
    let mut top_offset = 0.0;
    let mut bottom_offset = 0.0;
    if let Some((axis_min, axis_max)) = value_axis_range {
        if y >= 0.0 {
            if axis_max < y {
                top_offset = y - axis_max;
            }
            if axis_min > 0.0 {
                bottom_offset = axis_min;
            }
        } else {
            if axis_max < 0.0 {
                top_offset = -axis_max;
            }
            if axis_min > y {
                bottom_offset = axis_min - y;
            }
        }
        if inverted {
            std::mem::swap(&mut top_offset, &mut bottom_offset);
        }
    }
    if inverted {
        top += top_offset;
        bottom -= bottom_offset;
    } else {
        top -= top_offset;
        bottom += bottom_offset;
    }

    // Only the value-carrying edge grows with the phase; a boundary-clamped
    // edge stays put at the axis limit.
    if top > 0.0 + top_offset {
        top *= phase_y;
    } else {
        bottom *= phase_y;
    }

    buffer.push(series_index, ValueRect::new(left, top, right, bottom))
}

fn feed_stacked_bar(
    series_index: usize,
    entry: &BarEntry,
    values: &[f64],
    half_width: f64,
    phase_y: f64,
    buffer: &mut BarBuffer,
) -> ChartResult<()> {
    let x = entry.x();
    let left = x - half_width;
    let right = x + half_width;

    // Positive segments stack upward from 0, negative segments downward from
    // -negative_sum; the running totals never interfere.
    let mut pos_y = 0.0_f64;
    let mut neg_y = -entry.negative_sum();

    for value in values {
        let (y_from, y_to);
        if *value == 0.0 && (pos_y == 0.0 || neg_y == 0.0) {
            // A zero segment abutting a nonzero bar becomes a zero-height
            // marker at zero instead of inheriting the other sign's offset.
            y_from = 0.0;
            y_to = 0.0;
        } else if *value >= 0.0 {
            y_from = pos_y;
            y_to = pos_y + value;
            pos_y = y_to;
        } else {
            y_from = neg_y;
            y_to = neg_y + value.abs();
            neg_y += value.abs();
        }

        // Both edges scale with the phase. A zero-height result is still
        // pushed: every logical segment keeps exactly one rect slot.
        buffer.push(
            series_index,
            ValueRect::new(left, y_to * phase_y, right, y_from * phase_y),
        )?;
    }

    Ok(())
}
