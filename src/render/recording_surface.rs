use crate::error::ChartResult;
use crate::render::{DrawSurface, IconPrimitive, RectPrimitive, TextPrimitive};

/// Recording surface used by tests and headless engine usage.
///
/// It validates every primitive so tests catch invalid geometry before a real
/// backend is introduced, and keeps the recorded commands inspectable.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub fills: Vec<RectPrimitive>,
    pub rounded_fills: Vec<RectPrimitive>,
    pub strokes: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub icons: Vec<IconPrimitive>,
}

impl RecordingSurface {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
            && self.rounded_fills.is_empty()
            && self.strokes.is_empty()
            && self.texts.is_empty()
            && self.icons.is_empty()
    }

    pub fn clear(&mut self) {
        self.fills.clear();
        self.rounded_fills.clear();
        self.strokes.clear();
        self.texts.clear();
        self.icons.clear();
    }

    /// Filled rects across both square and rounded commands.
    #[must_use]
    pub fn filled_rect_count(&self) -> usize {
        self.fills.len() + self.rounded_fills.len()
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        rect.validate()?;
        self.fills.push(*rect);
        Ok(())
    }

    fn stroke_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        rect.validate()?;
        self.strokes.push(*rect);
        Ok(())
    }

    fn fill_rounded_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        rect.validate()?;
        self.rounded_fills.push(*rect);
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        self.texts.push(text.clone());
        Ok(())
    }

    fn draw_icon(&mut self, icon: &IconPrimitive) -> ChartResult<()> {
        icon.validate()?;
        self.icons.push(icon.clone());
        Ok(())
    }
}
