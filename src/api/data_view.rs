use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};
use crate::format::format_number;

/// One categorical field of a host table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryColumn {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub values: Vec<Value>,
}

/// One numeric measure field of a host table, index-aligned with categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasureColumn {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub values: Vec<Value>,
}

/// Host-neutral snapshot of the tabular data handed over on each update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataView {
    #[serde(default)]
    pub categories: Vec<CategoryColumn>,
    #[serde(default)]
    pub measures: Vec<MeasureColumn>,
}

impl DataView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_category<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.categories.push(CategoryColumn {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    #[must_use]
    pub fn with_measure<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.measures.push(MeasureColumn {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse data view: {e}")))
    }

    /// `true` when there is a categorical field and at least two measures.
    #[must_use]
    pub fn has_required_fields(&self) -> bool {
        !self.categories.is_empty() && self.measures.len() >= 2
    }

    /// Zips the first category column with the first two measures.
    ///
    /// Returns `None` when required fields are missing. Rows beyond the
    /// shortest column are ignored; rows with a null category are dropped.
    /// Measure values that cannot be read as numbers become `NaN` and are
    /// left for the layout pass to skip.
    #[must_use]
    pub fn to_data_points(&self) -> Option<Vec<DataPoint>> {
        if !self.has_required_fields() {
            debug!(
                categories = self.categories.len(),
                measures = self.measures.len(),
                "data view lacks a category or two measures"
            );
            return None;
        }

        let categories = &self.categories[0].values;
        let first = &self.measures[0].values;
        let second = &self.measures[1].values;

        let points = categories
            .iter()
            .zip(first)
            .zip(second)
            .enumerate()
            .filter_map(|(row, ((category, value_a), value_b))| {
                let Some(category) = coerce_category(category) else {
                    warn!(row, "dropping row with null category");
                    return None;
                };
                Some(DataPoint::new(
                    category,
                    coerce_measure(value_a),
                    coerce_measure(value_b),
                ))
            })
            .collect();
        Some(points)
    }
}

/// Converts a raw category cell to its display label.
#[must_use]
pub fn coerce_category(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => number.as_f64().map(format_number),
        Value::Bool(flag) => Some(flag.to_string()),
        other => Some(other.to_string()),
    }
}

/// Converts a raw measure cell to a number, `NaN` when it has none.
#[must_use]
pub fn coerce_measure(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => text.trim().parse().unwrap_or(f64::NAN),
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        _ => f64::NAN,
    }
}
