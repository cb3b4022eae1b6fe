//! Trailing-expression detection for note lines.
//!
//! Determines which suffix of a line, if any, is a candidate arithmetic
//! expression. Only character-set membership is checked here; grammatical
//! validity is the evaluator's job.

/// Check if a character may appear in a trailing arithmetic run.
fn is_expression_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')') || c.is_whitespace()
}

/// Extract the trailing arithmetic fragment of a line, if any.
///
/// Scans backward from the end of the line and takes the longest suffix
/// consisting entirely of digits, `.`, `+`, `-`, `*`, `/`, parentheses,
/// and whitespace. This lets prose lines like "Dinner with friends 50+20"
/// yield just `"50+20"`.
///
/// Returns the fragment with boundary whitespace stripped, or `None` when
/// the suffix is empty or whitespace only.
pub fn trailing_expression(line: &str) -> Option<&str> {
    let mut start = line.len();
    for (idx, c) in line.char_indices().rev() {
        if !is_expression_char(c) {
            break;
        }
        start = idx;
    }

    let fragment = line[start..].trim();
    if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prose_lines_rejected() {
        assert_eq!(trailing_expression("Buy groceries"), None);
        assert_eq!(trailing_expression("hello world"), None);
        assert_eq!(trailing_expression(""), None);
    }

    #[test]
    fn test_trailing_whitespace_only_rejected() {
        assert_eq!(trailing_expression("Buy groceries   "), None);
        assert_eq!(trailing_expression("   "), None);
    }

    #[test]
    fn test_trailing_run_extracted() {
        assert_eq!(trailing_expression("Dinner with friends 50+20"), Some("50+20"));
        assert_eq!(trailing_expression("Taxi 20"), Some("20"));
        assert_eq!(trailing_expression("Room 203"), Some("203"));
    }

    #[test]
    fn test_whole_line_matches_in_full() {
        assert_eq!(trailing_expression("12 * (3 + 4)"), Some("12 * (3 + 4)"));
        assert_eq!(trailing_expression("  10 + 5  "), Some("10 + 5"));
    }

    #[test]
    fn test_operators_without_digits_still_match() {
        // Character-set membership only; the evaluator rejects these later.
        assert_eq!(trailing_expression("weird ()"), Some("()"));
        assert_eq!(trailing_expression("Total: 12++"), Some("12++"));
    }

    #[test]
    fn test_non_ascii_prefix_ignored() {
        assert_eq!(trailing_expression("午餐 10+5"), Some("10+5"));
    }
}
