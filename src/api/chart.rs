use tracing::debug;

use crate::core::{DataPoint, Viewport};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};
use crate::text::{TextMeasurer, wrap_labels};

use super::{DataView, VisualConfig, layout};

/// One dumbbell chart bound to a drawing surface.
///
/// Each update recomputes the whole frame from scratch and hands it to the
/// renderer, which replaces whatever it drew before. The only state kept
/// between updates is the immutable config and the surface itself.
pub struct DumbbellChart<R: Renderer, M: TextMeasurer> {
    renderer: R,
    measurer: M,
    config: VisualConfig,
}

impl<R: Renderer, M: TextMeasurer> DumbbellChart<R, M> {
    pub fn new(renderer: R, measurer: M, config: VisualConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            measurer,
            config,
        })
    }

    /// Handles a host "data or viewport changed" notification.
    ///
    /// A missing data view, a missing category field or fewer than two
    /// measures clears the surface and returns `Ok`.
    pub fn update(&mut self, viewport: Viewport, data_view: Option<&DataView>) -> ChartResult<()> {
        match data_view.and_then(DataView::to_data_points) {
            Some(points) => self.render_points(viewport, &points),
            None => {
                debug!("no usable data view, clearing chart");
                self.renderer.render(&RenderFrame::new(viewport))
            }
        }
    }

    /// Lays out `points`, wraps category labels and commits the frame.
    pub fn render_points(&mut self, viewport: Viewport, points: &[DataPoint]) -> ChartResult<()> {
        let frame = self.build_frame(viewport, points);
        debug!(primitives = frame.primitives.len(), "committing frame");
        self.renderer.render(&frame)
    }

    /// Frame that `render_points` would commit, without touching the surface.
    #[must_use]
    pub fn build_frame(&self, viewport: Viewport, points: &[DataPoint]) -> RenderFrame {
        let mut primitives = layout(points, viewport, &self.config);
        wrap_labels(&mut primitives, &self.measurer);
        RenderFrame::new(viewport).with_primitives(primitives)
    }

    #[must_use]
    pub fn config(&self) -> &VisualConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
