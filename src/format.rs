//! Number-to-text conversion shared by value labels and SVG output.

/// Formats `value` the way JavaScript's `Number#toString` does: shortest
/// round-trip decimal, integers without a fractional part, `-0` as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let mut buffer = ryu_js::Buffer::new();
    buffer.format(value).to_owned()
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn integers_drop_fraction() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn fractions_keep_full_precision() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(12.5), "12.5");
    }

    #[test]
    fn large_values_use_exponent_like_javascript() {
        assert_eq!(format_number(1e21), "1e+21");
    }
}
