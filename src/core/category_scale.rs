use indexmap::IndexSet;

/// Point scale over distinct category labels, in first-seen order.
///
/// Positions are evenly spaced across `[range_start, range_end]` inclusive.
/// A single category sits at the midpoint of the range.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScale {
    domain: IndexSet<String>,
    range_start: f64,
    range_end: f64,
}

impl CategoryScale {
    #[must_use]
    pub fn new<I, S>(categories: I, range_start: f64, range_end: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domain: categories.into_iter().map(Into::into).collect(),
            range_start,
            range_end,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }

    #[must_use]
    pub fn index_of(&self, category: &str) -> Option<usize> {
        self.domain.get_index_of(category)
    }

    /// Distance between adjacent categories; 0 for fewer than two.
    #[must_use]
    pub fn step(&self) -> f64 {
        match self.domain.len() {
            0 | 1 => 0.0,
            n => (self.range_end - self.range_start) / (n - 1) as f64,
        }
    }

    #[must_use]
    pub fn position(&self, category: &str) -> Option<f64> {
        let index = self.index_of(category)?;
        if self.domain.len() == 1 {
            return Some(self.range_start + (self.range_end - self.range_start) / 2.0);
        }
        Some(self.range_start + self.step() * index as f64)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::CategoryScale;

    #[test]
    fn spreads_categories_across_inclusive_range() {
        let scale = CategoryScale::new(["a", "b", "c"], 20.0, 220.0);
        assert_relative_eq!(scale.position("a").expect("a"), 20.0);
        assert_relative_eq!(scale.position("b").expect("b"), 120.0);
        assert_relative_eq!(scale.position("c").expect("c"), 220.0);
        assert_relative_eq!(scale.step(), 100.0);
    }

    #[test]
    fn single_category_sits_at_midpoint() {
        let scale = CategoryScale::new(["only"], 40.0, 160.0);
        assert_relative_eq!(scale.position("only").expect("only"), 100.0);
        assert_eq!(scale.step(), 0.0);
    }

    #[test]
    fn duplicates_collapse_and_unknown_has_no_position() {
        let scale = CategoryScale::new(["x", "y", "x"], 0.0, 10.0);
        assert_eq!(scale.len(), 2);
        assert_eq!(scale.domain().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(scale.position("z"), None);
    }

    #[test]
    fn empty_domain_has_no_positions() {
        let scale = CategoryScale::new(Vec::<String>::new(), 0.0, 10.0);
        assert!(scale.is_empty());
        assert_eq!(scale.position("a"), None);
    }
}
