use crate::error::ChartResult;
use crate::render::{IconPrimitive, RectPrimitive, TextPrimitive};

/// Contract implemented by any 2D drawing backend.
///
/// The geometry engine depends only on this capability set; it never touches
/// a concrete graphics context. Calls arrive in draw order within one frame
/// pass and backends may rasterize immediately or record for later.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()>;

    fn stroke_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()>;

    fn fill_rounded_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()>;

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;

    fn draw_icon(&mut self, icon: &IconPrimitive) -> ChartResult<()>;
}
