use tracing::trace;

use crate::core::{AnimationPhases, BarChartData, PixelRect, ValueRect, ValueTransformer};
use crate::error::ChartResult;
use crate::render::Color;

/// Transient selection request produced by input handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightRequest {
    /// Axis-space x of the hit.
    pub x: f64,
    /// Axis-space y of the hit, used to tie-break equal-x entries.
    pub y: f64,
    pub data_set_index: usize,
    /// Targeted stack segment; `None` targets the whole bar.
    pub stack_index: Option<usize>,
}

/// The single rectangle resolved for one highlight request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedHighlight {
    pub data_set_index: usize,
    pub entry_index: usize,
    pub stack_index: Option<usize>,
    pub rect: PixelRect,
    /// Tooltip anchor: bar midpoint-x, top-y of the highlight rect.
    pub draw_x: f64,
    pub draw_y: f64,
    pub color: Color,
}

/// Resolves a highlight request to zero or one pixel-space rectangle.
///
/// Misses are frequent during interactive dragging and resolve to `Ok(None)`:
/// unknown series index, highlighting disabled on the series, no entry close
/// enough to the requested x, or a stack segment without a range.
pub fn resolve_highlight(
    data: &BarChartData,
    request: &HighlightRequest,
    transformer: &ValueTransformer,
    phases: AnimationPhases,
    full_bar: bool,
) -> ChartResult<Option<ResolvedHighlight>> {
    let Some(set) = data.data_set(request.data_set_index) else {
        return Ok(None);
    };
    if !set.highlight_enabled() {
        return Ok(None);
    }
    let Some((entry_index, entry)) = set.closest_entry_to(request.x, request.y) else {
        return Ok(None);
    };
    // A hit farther than half a bar width from the nearest entry is a miss.
    if (entry.x() - request.x).abs() > data.half_bar_width() {
        trace!(
            requested_x = request.x,
            nearest_x = entry.x(),
            "highlight request missed every bar"
        );
        return Ok(None);
    }

    let is_stack = request.stack_index.is_some() && entry.is_stacked();
    let (y_from, y_to) = if is_stack {
        if full_bar {
            (entry.positive_sum(), -entry.negative_sum())
        } else {
            let stack_index = request.stack_index.unwrap_or_default();
            match entry.range(stack_index) {
                Some(range) => (range.from, range.to),
                None => return Ok(None),
            }
        }
    } else {
        (entry.y(), 0.0)
    };

    let half_width = data.half_bar_width();
    let rect = transformer.rect_to_pixel_with_phase(
        ValueRect::new(entry.x() - half_width, y_from, entry.x() + half_width, y_to),
        phases.y(),
    );
    let style = set.style();

    Ok(Some(ResolvedHighlight {
        data_set_index: request.data_set_index,
        entry_index,
        stack_index: if is_stack { request.stack_index } else { None },
        rect,
        draw_x: rect.mid_x(),
        draw_y: rect.y,
        color: style.highlight_color.with_alpha(style.highlight_alpha),
    }))
}
