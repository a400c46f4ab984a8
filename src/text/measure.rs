/// Rendered-width oracle supplied by the drawing surface.
///
/// Implementations must be deterministic for a given `(text, font_size_px)`
/// pair; wrapping output depends on nothing else.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> f64;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, f64) -> f64,
{
    fn measure(&self, text: &str, font_size_px: f64) -> f64 {
        self(text, font_size_px)
    }
}

/// Fixed-advance metrics: every character is `advance_em` font sizes wide.
///
/// Used by headless hosts and tests where no live text layout exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    pub advance_em: f64,
}

impl MonospaceMeasurer {
    #[must_use]
    pub const fn new(advance_em: f64) -> Self {
        Self { advance_em }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> f64 {
        text.chars().count() as f64 * self.advance_em * font_size_px
    }
}

#[cfg(test)]
mod tests {
    use super::{MonospaceMeasurer, TextMeasurer};

    #[test]
    fn monospace_width_scales_with_chars_and_font() {
        let measurer = MonospaceMeasurer::new(0.5);
        assert_eq!(measurer.measure("abcd", 10.0), 20.0);
        assert_eq!(measurer.measure("héllo", 10.0), 25.0);
        assert_eq!(measurer.measure("", 10.0), 0.0);
    }

    #[test]
    fn closures_act_as_measurers() {
        let measurer = |text: &str, _font: f64| text.len() as f64 * 10.0;
        assert_eq!(measurer.measure("abc", 12.0), 30.0);
    }
}
