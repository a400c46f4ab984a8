use tracing::{debug, trace, warn};

use crate::core::{CategoryScale, ColorScale, DataPoint, ValueScale, Viewport};
use crate::format::format_number;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, Primitive, RenderFrame, TextHAlign, TextPrimitive,
    TextVAlign,
};

use super::VisualConfig;

/// Number of primitives emitted for every rendered data point.
pub const PRIMITIVES_PER_POINT: usize = 7;

/// Scales derived for one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutScales {
    pub x: ValueScale,
    pub y: CategoryScale,
    pub color: ColorScale,
}

impl LayoutScales {
    /// Builds the value, category and color scales for `points`.
    ///
    /// Returns `None` when the value domain is not finite.
    #[must_use]
    pub fn new<'a, I>(points: I, viewport: Viewport, config: &VisualConfig) -> Option<Self>
    where
        I: IntoIterator<Item = &'a DataPoint> + Clone,
    {
        let margins = config.margins;
        let x = ValueScale::from_points(
            points.clone(),
            margins.left,
            viewport.width - margins.right,
        )
        .inspect_err(|err| warn!(error = %err, "skipping layout with invalid value domain"))
        .ok()?;
        let categories = || points.clone().into_iter().map(|p| p.category.as_str());
        let y = CategoryScale::new(
            categories(),
            margins.top,
            viewport.height - margins.bottom,
        );
        let color = ColorScale::new(categories(), &config.palette);
        Some(Self { x, y, color })
    }
}

/// Maps `data` to positioned drawing primitives.
///
/// Empty data or a viewport without positive area yields no primitives.
/// Points with an empty category, a non-finite value, or a value whose pixel
/// position overflows are skipped. Every
/// remaining point contributes, in order: dashed gridline, connector, hollow
/// first-value circle, filled second-value circle, first-value label,
/// second-value label and the category label (marked for wrapping).
#[must_use]
pub fn layout(data: &[DataPoint], viewport: Viewport, config: &VisualConfig) -> Vec<Primitive> {
    if data.is_empty() || !viewport.is_drawable() {
        debug!(
            points = data.len(),
            width = viewport.width,
            height = viewport.height,
            "nothing to lay out"
        );
        return Vec::new();
    }

    let points: Vec<&DataPoint> = data
        .iter()
        .filter(|point| {
            let keep = point.is_renderable();
            if !keep {
                warn!(
                    category = %point.category,
                    value_a = point.value_a,
                    value_b = point.value_b,
                    "skipping data point with empty category or non-finite value"
                );
            }
            keep
        })
        .collect();
    if points.is_empty() {
        return Vec::new();
    }

    let Some(scales) = LayoutScales::new(points.iter().copied(), viewport, config) else {
        return Vec::new();
    };
    debug!(
        points = points.len(),
        categories = scales.y.len(),
        domain_max = scales.x.domain().1,
        "laying out dumbbell chart"
    );

    let mut primitives = Vec::with_capacity(points.len() * PRIMITIVES_PER_POINT);
    for point in points {
        let (Some(y), Some(color)) = (
            scales.y.position(&point.category),
            scales.color.color(&point.category),
        ) else {
            warn!(category = %point.category, "skipping data point without scale position");
            continue;
        };
        let x_a = scales.x.to_pixel(point.value_a);
        let x_b = scales.x.to_pixel(point.value_b);
        if !x_a.is_finite() || !x_b.is_finite() {
            warn!(
                category = %point.category,
                value_a = point.value_a,
                value_b = point.value_b,
                "skipping data point whose values overflow the pixel range"
            );
            continue;
        }
        trace!(category = %point.category, x_a, x_b, y, "placing data point");
        push_point_primitives(&mut primitives, point, x_a, x_b, y, color, config);
    }
    primitives
}

/// `layout` wrapped into a frame sized to `viewport`.
#[must_use]
pub fn layout_frame(data: &[DataPoint], viewport: Viewport, config: &VisualConfig) -> RenderFrame {
    RenderFrame::new(viewport).with_primitives(layout(data, viewport, config))
}

fn push_point_primitives(
    out: &mut Vec<Primitive>,
    point: &DataPoint,
    x_a: f64,
    x_b: f64,
    y: f64,
    color: Color,
    config: &VisualConfig,
) {
    let radius = config.circle_radius;
    let font_size = config.font_size_px;

    out.push(Primitive::Line(
        LinePrimitive::new(
            config.margins.left,
            y,
            x_a - radius,
            y,
            config.gridline_stroke_width,
            config.gridline_color,
        )
        .with_stroke_style(config.gridline_style),
    ));
    out.push(Primitive::Line(LinePrimitive::new(
        x_a + radius,
        y,
        x_b - radius,
        y,
        config.stroke_width,
        color,
    )));
    out.push(Primitive::Circle(CirclePrimitive::new(
        x_a,
        y,
        radius,
        config.hollow_fill,
        color,
        config.stroke_width,
    )));
    out.push(Primitive::Circle(CirclePrimitive::new(
        x_b,
        y,
        radius,
        color,
        color,
        config.stroke_width,
    )));
    out.push(Primitive::Text(
        TextPrimitive::new(
            format_number(point.value_a),
            x_a,
            y,
            font_size,
            color,
            TextHAlign::Center,
        )
        .with_v_align(TextVAlign::Middle),
    ));
    out.push(Primitive::Text(
        TextPrimitive::new(
            format_number(point.value_b),
            x_b,
            y,
            font_size,
            config.inverse_text_color,
            TextHAlign::Center,
        )
        .with_v_align(TextVAlign::Middle),
    ));
    out.push(Primitive::Text(
        TextPrimitive::new(
            point.category.clone(),
            config.margins.left - config.category_label_gap,
            y,
            font_size,
            config.category_label_color,
            TextHAlign::Right,
        )
        .with_v_align(TextVAlign::Middle)
        .with_line_height_em(config.line_height_em)
        .with_wrap_width(config.category_label_max_width),
    ));
}
