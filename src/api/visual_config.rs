use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

/// Plot-area insets in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}

/// Static visual constants shared by every render.
///
/// This type is serializable so hosts can persist/load chart styling as JSON;
/// every field falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_margins")]
    pub margins: Margins,
    #[serde(default = "default_circle_radius")]
    pub circle_radius: f64,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    /// Distance between the left margin and the right edge of category labels.
    #[serde(default = "default_category_label_gap")]
    pub category_label_gap: f64,
    /// Wrap width handed to the Label Wrapper for category labels.
    #[serde(default = "default_category_label_max_width")]
    pub category_label_max_width: f64,
    #[serde(default = "default_category_label_color")]
    pub category_label_color: Color,
    #[serde(default = "default_line_height_em")]
    pub line_height_em: f64,
    #[serde(default = "default_gridline_color")]
    pub gridline_color: Color,
    #[serde(default = "default_gridline_stroke_width")]
    pub gridline_stroke_width: f64,
    #[serde(default = "default_gridline_style")]
    pub gridline_style: LineStrokeStyle,
    /// Fill of the first-value circle.
    #[serde(default = "default_hollow_fill")]
    pub hollow_fill: Color,
    /// Text color drawn on top of the filled second-value circle.
    #[serde(default = "default_inverse_text_color")]
    pub inverse_text_color: Color,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            margins: default_margins(),
            circle_radius: default_circle_radius(),
            stroke_width: default_stroke_width(),
            palette: default_palette(),
            font_size_px: default_font_size_px(),
            category_label_gap: default_category_label_gap(),
            category_label_max_width: default_category_label_max_width(),
            category_label_color: default_category_label_color(),
            line_height_em: default_line_height_em(),
            gridline_color: default_gridline_color(),
            gridline_stroke_width: default_gridline_stroke_width(),
            gridline_style: default_gridline_style(),
            hollow_fill: default_hollow_fill(),
            inverse_text_color: default_inverse_text_color(),
        }
    }
}

impl VisualConfig {
    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_circle_radius(mut self, circle_radius: f64) -> Self {
        self.circle_radius = circle_radius;
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_font_size_px(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_category_label_max_width(mut self, max_width: f64) -> Self {
        self.category_label_max_width = max_width;
        self
    }

    #[must_use]
    pub fn with_gridline_style(mut self, style: LineStrokeStyle) -> Self {
        self.gridline_style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        let Margins {
            left,
            right,
            top,
            bottom,
        } = self.margins;
        for (name, value) in [
            ("margins.left", left),
            ("margins.right", right),
            ("margins.top", top),
            ("margins.bottom", bottom),
            ("category_label_gap", self.category_label_gap),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!("`{name}` must be finite and >= 0")));
            }
        }

        for (name, value) in [
            ("circle_radius", self.circle_radius),
            ("stroke_width", self.stroke_width),
            ("font_size_px", self.font_size_px),
            ("category_label_max_width", self.category_label_max_width),
            ("line_height_em", self.line_height_em),
            ("gridline_stroke_width", self.gridline_stroke_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!("`{name}` must be finite and > 0")));
            }
        }

        if let LineStrokeStyle::Dashed { dash_px, gap_px } = self.gridline_style {
            if !dash_px.is_finite() || !gap_px.is_finite() || dash_px <= 0.0 || gap_px < 0.0 {
                return Err(ChartError::InvalidConfig(
                    "gridline dash must be > 0 and gap >= 0".to_owned(),
                ));
            }
        }

        if self.palette.is_empty() {
            return Err(ChartError::InvalidConfig(
                "palette must contain at least one color".to_owned(),
            ));
        }

        let styling = [
            &self.category_label_color,
            &self.gridline_color,
            &self.hollow_fill,
            &self.inverse_text_color,
        ];
        for color in self.palette.iter().chain(styling) {
            color.validate().map_err(|e| ChartError::InvalidConfig(e.to_string()))?;
        }

        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse visual config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize visual config: {e}"))
        })
    }
}

fn default_margins() -> Margins {
    Margins::new(120.0, 40.0, 40.0, 40.0)
}

fn default_circle_radius() -> f64 {
    14.0
}

fn default_stroke_width() -> f64 {
    3.0
}

fn default_palette() -> Vec<Color> {
    [
        (0x1f, 0x77, 0xb4),
        (0xff, 0x7f, 0x0e),
        (0x2c, 0xa0, 0x2c),
        (0xd6, 0x27, 0x28),
        (0x94, 0x67, 0xbd),
        (0x8c, 0x56, 0x4b),
        (0xe3, 0x77, 0xc2),
        (0x7f, 0x7f, 0x7f),
        (0xbc, 0xbd, 0x22),
        (0x17, 0xbe, 0xcf),
    ]
    .into_iter()
    .map(|(red, green, blue)| Color::from_rgb8(red, green, blue))
    .collect()
}

fn default_font_size_px() -> f64 {
    11.0
}

fn default_category_label_gap() -> f64 {
    10.0
}

fn default_category_label_max_width() -> f64 {
    100.0
}

fn default_category_label_color() -> Color {
    Color::from_rgb8(0x33, 0x33, 0x33)
}

fn default_line_height_em() -> f64 {
    1.2
}

fn default_gridline_color() -> Color {
    Color::from_rgb8(0xcc, 0xcc, 0xcc)
}

fn default_gridline_stroke_width() -> f64 {
    1.0
}

fn default_gridline_style() -> LineStrokeStyle {
    LineStrokeStyle::Dashed {
        dash_px: 4.0,
        gap_px: 4.0,
    }
}

fn default_hollow_fill() -> Color {
    Color::WHITE
}

fn default_inverse_text_color() -> Color {
    Color::WHITE
}
