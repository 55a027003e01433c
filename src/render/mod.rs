mod primitives;
mod recording_surface;
mod surface;

pub use primitives::{Color, IconPrimitive, RectPrimitive, TextHAlign, TextPrimitive};
pub use recording_surface::RecordingSurface;
pub use surface::DrawSurface;

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
