use indexmap::IndexSet;

use crate::render::Color;

/// Ordinal category → palette color mapping.
///
/// Colors are assigned by first-seen category index and cycle once the
/// categories outnumber the palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    domain: IndexSet<String>,
    palette: Vec<Color>,
}

impl ColorScale {
    #[must_use]
    pub fn new<I, S>(categories: I, palette: &[Color]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domain: categories.into_iter().map(Into::into).collect(),
            palette: palette.to_vec(),
        }
    }

    /// `None` for an unknown category or an empty palette.
    #[must_use]
    pub fn color(&self, category: &str) -> Option<Color> {
        if self.palette.is_empty() {
            return None;
        }
        let index = self.domain.get_index_of(category)?;
        self.palette.get(index % self.palette.len()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::ColorScale;
    use crate::render::Color;

    #[test]
    fn palette_cycles_past_its_length() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let blue = Color::rgb(0.0, 0.0, 1.0);
        let scale = ColorScale::new(["a", "b", "c", "d"], &[red, blue]);
        assert_eq!(scale.color("a"), Some(red));
        assert_eq!(scale.color("b"), Some(blue));
        assert_eq!(scale.color("c"), Some(red));
        assert_eq!(scale.color("d"), Some(blue));
        assert_eq!(scale.color("e"), None);
    }

    #[test]
    fn empty_palette_yields_no_color() {
        let scale = ColorScale::new(["a"], &[]);
        assert_eq!(scale.color("a"), None);
    }
}
