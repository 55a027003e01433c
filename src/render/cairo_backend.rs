use cairo::{Context, Format, ImageSurface};
use indexmap::IndexMap;
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawSurface, IconPrimitive, RectPrimitive, TextHAlign, TextPrimitive};

/// Cairo + Pango + PangoCairo draw-surface backend.
///
/// Renders into an offscreen image surface. Icons are drawn only for names
/// the host registered through [`CairoSurface::register_icon`]; unknown icon
/// references are skipped, matching the engine's missing-optional-data rule.
pub struct CairoSurface {
    surface: ImageSurface,
    context: Context,
    icons: IndexMap<String, ImageSurface>,
}

impl CairoSurface {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            surface,
            context,
            icons: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn register_icon(&mut self, name: impl Into<String>, image: ImageSurface) {
        self.icons.insert(name.into(), image);
    }

    pub fn clear(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        apply_color(&self.context, color);
        self.context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))
    }
}

impl DrawSurface for CairoSurface {
    fn fill_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        rect.validate()?;
        apply_color(&self.context, rect.color);
        self.context
            .rectangle(rect.rect.x, rect.rect.y, rect.rect.width, rect.rect.height);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }

    fn stroke_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        rect.validate()?;
        if rect.stroke_width <= 0.0 {
            return Ok(());
        }
        apply_color(&self.context, rect.color);
        self.context.set_line_width(rect.stroke_width);
        self.context
            .rectangle(rect.rect.x, rect.rect.y, rect.rect.width, rect.rect.height);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle", err))
    }

    fn fill_rounded_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        rect.validate()?;
        append_rounded_rect_path(&self.context, rect);
        apply_color(&self.context, rect.color);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rounded rectangle", err))
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(&self.context, text.color);
        self.context.move_to(x, text.y);
        pangocairo::functions::show_layout(&self.context, &layout);
        Ok(())
    }

    fn draw_icon(&mut self, icon: &IconPrimitive) -> ChartResult<()> {
        icon.validate()?;
        let Some(image) = self.icons.get(&icon.icon.name) else {
            return Ok(());
        };

        let x = icon.x - icon.icon.width_px * 0.5;
        let y = icon.y - icon.icon.height_px * 0.5;
        self.context
            .set_source_surface(image, x, y)
            .map_err(|err| map_backend_error("failed to source icon surface", err))?;
        self.context
            .paint()
            .map_err(|err| map_backend_error("failed to paint icon", err))
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_rounded_rect_path(context: &Context, rect: &RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.rect.x, rect.rect.y, rect.rect.width, rect.rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.rect.width * 0.5)
        .min(rect.rect.height * 0.5);
    let left = rect.rect.x;
    let top = rect.rect.y;
    let right = rect.rect.x + rect.rect.width;
    let bottom = rect.rect.y + rect.rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
