mod frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, Primitive, PrimitiveKind, TextHAlign,
    TextPrimitive, TextVAlign,
};
pub use svg_renderer::SvgRenderer;

use crate::error::ChartResult;

/// Drawing-surface adapter.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` and
/// must replace any previously drawn content with it. All mutable surface
/// handling lives behind this trait; layout never touches it.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
