use ordered_float::OrderedFloat;

use crate::core::types::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Linear mapping from `[0, domain_max]` onto a horizontal pixel range.
///
/// A zero `domain_max` is a degenerate domain: every value maps to
/// `range_start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    domain_max: f64,
    range_start: f64,
    range_end: f64,
}

impl ValueScale {
    pub fn new(domain_max: f64, range_start: f64, range_end: f64) -> ChartResult<Self> {
        if !domain_max.is_finite() {
            return Err(ChartError::InvalidData("value scale domain must be finite".to_owned()));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData("value scale range must be finite".to_owned()));
        }

        Ok(Self {
            domain_max,
            range_start,
            range_end,
        })
    }

    /// Builds the scale whose domain upper bound is the largest of all
    /// `value_a`/`value_b` across `points` (0 for no points).
    pub fn from_points<'a, I>(points: I, range_start: f64, range_end: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = &'a DataPoint>,
    {
        Self::new(max_value(points), range_start, range_end)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (0.0, self.domain_max)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn to_pixel(self, value: f64) -> f64 {
        if self.domain_max == 0.0 {
            return self.range_start;
        }
        let normalized = value / self.domain_max;
        self.range_start + normalized * (self.range_end - self.range_start)
    }
}

/// Largest value across both series, or 0 when `points` is empty.
#[must_use]
pub fn max_value<'a, I>(points: I) -> f64
where
    I: IntoIterator<Item = &'a DataPoint>,
{
    points
        .into_iter()
        .map(|point| OrderedFloat(point.max_value()))
        .max()
        .map_or(0.0, |value| value.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{ValueScale, max_value};
    use crate::core::DataPoint;

    #[test]
    fn maps_domain_ends_onto_range_ends() {
        let scale = ValueScale::new(200.0, 100.0, 760.0).expect("valid scale");
        assert_relative_eq!(scale.to_pixel(0.0), 100.0);
        assert_relative_eq!(scale.to_pixel(200.0), 760.0);
        assert_relative_eq!(scale.to_pixel(50.0), 265.0);
    }

    #[test]
    fn degenerate_domain_pins_to_range_start() {
        let scale = ValueScale::new(0.0, 100.0, 760.0).expect("valid scale");
        assert_eq!(scale.to_pixel(0.0), 100.0);
        assert_eq!(scale.to_pixel(5.0), 100.0);
    }

    #[test]
    fn rejects_non_finite_domain() {
        assert!(ValueScale::new(f64::INFINITY, 0.0, 10.0).is_err());
        assert!(ValueScale::new(1.0, f64::NAN, 10.0).is_err());
    }

    #[test]
    fn max_value_considers_both_series() {
        let points = vec![
            DataPoint::new("a", 3.0, 9.5),
            DataPoint::new("b", 12.0, 1.0),
        ];
        assert_eq!(max_value(&points), 12.0);
        assert_eq!(max_value(std::iter::empty()), 0.0);
    }
}
