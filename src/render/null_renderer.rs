use crate::error::ChartResult;
use crate::render::{PrimitiveKind, RenderFrame, Renderer};

/// No-op surface used by tests and headless hosts.
///
/// It still validates frames so tests catch invalid geometry, and keeps the
/// last committed frame for inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_line_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_line_count = frame.count(PrimitiveKind::Line);
        self.last_circle_count = frame.count(PrimitiveKind::Circle);
        self.last_text_count = frame.count(PrimitiveKind::Text);
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
