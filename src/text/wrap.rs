use smallvec::SmallVec;
use tracing::trace;

use crate::render::{Primitive, TextPrimitive};
use crate::text::TextMeasurer;

/// Greedy word wrap of `text` into lines no wider than `max_width`.
///
/// Words are whitespace-separated and joined with single spaces. A word that
/// is wider than `max_width` on its own still gets a line of its own; nothing
/// is ever dropped or split mid-word. Whitespace-only input yields no lines.
pub fn wrap_label<F>(text: &str, max_width: f64, mut measure: F) -> Vec<String>
where
    F: FnMut(&str) -> f64,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_owned()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Reflows one label in place using its own font size and `wrap_width`.
///
/// Labels without a wrap width, or whose text has no words, are left as-is.
pub fn wrap_text_primitive<M>(text: &mut TextPrimitive, measurer: &M)
where
    M: TextMeasurer + ?Sized,
{
    let Some(max_width) = text.wrap_width else {
        return;
    };

    let font_size_px = text.font_size_px;
    let lines = wrap_label(&text.text(), max_width, |fragment| {
        measurer.measure(fragment, font_size_px)
    });
    if lines.is_empty() {
        return;
    }

    trace!(line_count = lines.len(), max_width, "wrapped label");
    text.lines = SmallVec::from_vec(lines);
}

/// Passes every wrappable text primitive through the Label Wrapper.
pub fn wrap_labels<M>(primitives: &mut [Primitive], measurer: &M)
where
    M: TextMeasurer + ?Sized,
{
    for primitive in primitives {
        if let Primitive::Text(text) = primitive {
            wrap_text_primitive(text, measurer);
        }
    }
}
