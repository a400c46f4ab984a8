use serde::{Deserialize, Serialize};

/// Drawing area in CSS pixels as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` when both dimensions are finite and strictly positive.
    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// `true` when both dimensions are finite and non-negative.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

/// One category row: a label and the two values joined by a connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub category: String,
    pub value_a: f64,
    pub value_b: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(category: impl Into<String>, value_a: f64, value_b: f64) -> Self {
        Self {
            category: category.into(),
            value_a,
            value_b,
        }
    }

    /// Category with at least one word and finite values.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        !self.category.trim().is_empty() && self.value_a.is_finite() && self.value_b.is_finite()
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.value_a.max(self.value_b)
    }
}
