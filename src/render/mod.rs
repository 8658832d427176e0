mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, DEFAULT_PALETTE, PathPrimitive, RectPrimitive, palette_color, resolve_color,
};

use crate::error::ChartResult;

/// Contract implemented by any drawing backend (SVG writer, canvas, GPU).
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from data normalization and animation.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
