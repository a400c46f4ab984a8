use std::fmt::Write as _;

use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::format::format_number;
use crate::render::{
    CirclePrimitive, LinePrimitive, LineStrokeStyle, Primitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive, TextVAlign,
};

/// Serializes each committed frame into a standalone SVG document.
///
/// Every `render` call discards the previous document, mirroring a surface
/// that is cleared and rebuilt on each update.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// SVG markup of the last committed frame; empty before the first render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document.clear();
        write_frame(&mut self.document, frame)
            .map_err(|e| ChartError::InvalidData(format!("failed to write svg: {e}")))?;
        trace!(
            bytes = self.document.len(),
            primitives = frame.primitives.len(),
            "svg frame written"
        );
        Ok(())
    }
}

fn write_frame(out: &mut String, frame: &RenderFrame) -> std::fmt::Result {
    let width = format_number(frame.viewport.width);
    let height = format_number(frame.viewport.height);
    write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    for primitive in &frame.primitives {
        match primitive {
            Primitive::Line(line) => write_line(out, line)?,
            Primitive::Circle(circle) => write_circle(out, circle)?,
            Primitive::Text(text) => write_text(out, text)?,
        }
    }
    out.push_str("</svg>");
    Ok(())
}

fn write_line(out: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
        format_number(line.x1),
        format_number(line.y1),
        format_number(line.x2),
        format_number(line.y2),
        line.color.to_hex(),
        format_number(line.stroke_width),
    )?;
    if let LineStrokeStyle::Dashed { dash_px, gap_px } = line.stroke_style {
        write!(
            out,
            r#" stroke-dasharray="{},{}""#,
            format_number(dash_px),
            format_number(gap_px)
        )?;
    }
    out.push_str("/>");
    Ok(())
}

fn write_circle(out: &mut String, circle: &CirclePrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
        format_number(circle.cx),
        format_number(circle.cy),
        format_number(circle.radius),
        circle.fill.to_hex(),
        circle.stroke.to_hex(),
        format_number(circle.stroke_width),
    )
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let x = format_number(text.x);
    write!(
        out,
        r#"<text x="{x}" y="{}" fill="{}" font-size="{}" text-anchor="{anchor}""#,
        format_number(text.y),
        text.color.to_hex(),
        format_number(text.font_size_px),
    )?;
    if text.v_align == TextVAlign::Middle {
        out.push_str(r#" dominant-baseline="central""#);
    }
    out.push('>');

    if let [single] = text.lines.as_slice() {
        escape_xml_into(out, single);
    } else {
        let line_height = format_number(text.line_height_em);
        for (index, line) in text.lines.iter().enumerate() {
            let dy = if index == 0 {
                "0".to_owned()
            } else {
                format!("{line_height}em")
            };
            write!(out, r#"<tspan x="{x}" dy="{dy}">"#)?;
            escape_xml_into(out, line);
            out.push_str("</tspan>");
        }
    }
    out.push_str("</text>");
    Ok(())
}

fn escape_xml_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::escape_xml_into;

    #[test]
    fn escapes_markup_characters() {
        let mut out = String::new();
        escape_xml_into(&mut out, r#"R&D <"east">"#);
        assert_eq!(out, "R&amp;D &lt;&quot;east&quot;&gt;");
    }
}
