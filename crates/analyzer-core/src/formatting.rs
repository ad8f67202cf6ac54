/// Round `value` to `decimals` places.
///
/// Rounds the exact binary value, with exact ties going to the even digit,
/// so `0.0625` becomes `0.062` and `1.0005` (stored just below the tie)
/// becomes `1.0`.
///
/// # Examples
///
/// ```
/// use analyzer_core::formatting::round_to;
///
/// assert_eq!(round_to(2.25, 3), 2.25);
/// assert_eq!(round_to(1.0 / 3.0, 3), 0.333);
/// assert_eq!(round_to(0.0625, 3), 0.062);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    fixed(value, decimals).parse().unwrap_or(value)
}

/// Format a number in its shortest exact form after rounding to `decimals`
/// places: trailing zeros are dropped and whole numbers print without a
/// fractional part.
///
/// # Examples
///
/// ```
/// use analyzer_core::formatting::format_decimal;
///
/// assert_eq!(format_decimal(2.0, 3), "2");
/// assert_eq!(format_decimal(2.25, 3), "2.25");
/// assert_eq!(format_decimal(4.52449, 3), "4.524");
/// ```
pub fn format_decimal(value: f64, decimals: u32) -> String {
    let fixed = fixed(value, decimals);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    // Tiny negatives round to "-0".
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Fixed-point text with exactly `decimals` places.
fn fixed(value: f64, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_three_places() {
        assert_eq!(round_to(2.0, 3), 2.0);
        assert_eq!(round_to(4.524, 3), 4.524);
        assert_eq!(round_to(0.12345, 3), 0.123);
        assert_eq!(round_to(0.1236, 3), 0.124);
    }

    #[test]
    fn test_round_to_zero_places() {
        assert_eq!(round_to(2.4, 0), 2.0);
        assert_eq!(round_to(2.6, 0), 3.0);
    }

    #[test]
    fn test_format_decimal_shortest_form() {
        assert_eq!(format_decimal(2.0, 3), "2");
        assert_eq!(format_decimal(2.25, 3), "2.25");
        assert_eq!(format_decimal(4.524, 3), "4.524");
        assert_eq!(format_decimal(1.0 / 3.0, 3), "0.333");
        assert_eq!(format_decimal(1500.0, 3), "1500");
    }

    #[test]
    fn test_format_decimal_negative_zero() {
        assert_eq!(format_decimal(-0.0001, 3), "0");
        assert_eq!(format_decimal(-1.5, 3), "-1.5");
    }

    #[test]
    fn test_ties_round_to_even() {
        assert_eq!(round_to(0.0625, 3), 0.062);
        assert_eq!(round_to(0.5, 0), 0.0);
        assert_eq!(round_to(1.5, 0), 2.0);
        assert_eq!(format_decimal(0.0625, 3), "0.062");
        assert_eq!(format_decimal(2.0625, 3), "2.062");
    }

    #[test]
    fn test_rounding_uses_stored_binary_value() {
        // 1.0005 is stored as 1.000499999...
        assert_eq!(round_to(1.0005, 3), 1.0);
        assert_eq!(format_decimal(1.0005, 3), "1");
        assert_eq!(format_decimal(2.675, 2), "2.67");
    }
}
