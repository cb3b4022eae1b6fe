//! Display formatting for evaluated results and totals.
//!
//! Formatting is presentation only; the stored `f64` results are never
//! altered by it.

/// Format a result for display with thousand separators.
///
/// Separators are inserted into the integer digits of the plain rendering
/// directly, so values beyond the `i64` range and small negative fractions
/// format correctly.
pub fn format_amount(value: f64) -> String {
    let raw = format_raw(value);

    let (int_part, dec_part) = match raw.find('.') {
        Some(dot_pos) => raw.split_at(dot_pos),
        None => (raw.as_str(), ""),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    format!("{}{}{}", sign, insert_separators(digits), dec_part)
}

/// Format a result as a plain number, no separators, no trailing zeros.
pub fn format_raw(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{:.10}", value);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Insert a comma every three digits, counting from the right.
fn insert_separators(digits: &str) -> String {
    let mut reversed = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(c);
    }
    reversed.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_get_separators() {
        assert_eq!(format_amount(4.0), "4");
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(1000000.0), "1,000,000");
        assert_eq!(format_amount(-12345.0), "-12,345");
    }

    #[test]
    fn test_decimals_keep_fraction() {
        assert_eq!(format_amount(3.75), "3.75");
        assert_eq!(format_amount(1234.5), "1,234.5");
        assert!(format_amount(1.0 / 3.0).starts_with("0.333"));
    }

    #[test]
    fn test_totals_beyond_i64_range() {
        assert_eq!(format_amount(1e20), "100,000,000,000,000,000,000");
        assert_eq!(format_raw(1e20), "100000000000000000000");
    }

    #[test]
    fn test_negative_fraction_keeps_sign() {
        assert_eq!(format_amount(-0.5), "-0.5");
        assert_eq!(format_amount(-0.25), "-0.25");
        assert_eq!(format_raw(-0.5), "-0.5");
    }

    #[test]
    fn test_raw_has_no_separators() {
        assert_eq!(format_raw(1000000.0), "1000000");
        assert_eq!(format_raw(3.75), "3.75");
        assert_eq!(format_raw(-42.0), "-42");
    }
}
