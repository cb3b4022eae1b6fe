//! Line scanning and aggregation over full note content.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::detection::trailing_expression;
use super::evaluation::evaluate_expression;

/// One recognized arithmetic fragment within a note, paired with its value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpressionMatch {
    /// The exact matched substring, trimmed of boundary whitespace.
    pub expression: String,
    /// The evaluated value. Always finite.
    pub result: f64,
}

/// Everything extracted from one note's content.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Successful matches in line order, at most one per line.
    pub matches: Vec<ExpressionMatch>,
    /// Sum of all match results, 0 when there are none.
    pub total: f64,
}

impl EvaluationResult {
    /// Check if the content produced any matches at all.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Evaluate every line of a note's content and total the results.
///
/// Each line is handled independently: the trailing arithmetic fragment (if
/// any) is evaluated, and lines without a fragment or whose fragment fails
/// evaluation are skipped. A prose line is common, expected input, not an
/// error, so nothing is surfaced for skipped lines and a bad line never
/// affects its neighbours.
///
/// The function is pure: identical content always yields identical matches
/// and total, and no state is kept between calls.
pub fn evaluate_note_expressions(content: &str) -> EvaluationResult {
    let mut matches = Vec::new();
    let mut total = 0.0;

    for line in content.split('\n') {
        let Some(fragment) = trailing_expression(line) else {
            continue;
        };

        match evaluate_expression(fragment) {
            Ok(result) => {
                total += result;
                matches.push(ExpressionMatch {
                    expression: fragment.to_string(),
                    result,
                });
            }
            Err(err) => {
                trace!(fragment, %err, "skipping fragment that failed evaluation");
            }
        }
    }

    EvaluationResult { matches, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content() {
        let result = evaluate_note_expressions("");
        assert!(result.matches.is_empty());
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn test_prose_only_content() {
        let result = evaluate_note_expressions("Buy groceries\nCall the dentist");
        assert!(result.is_empty());
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn test_trailing_expression_after_prose() {
        let result = evaluate_note_expressions("Dinner with friends 50+20");
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].expression, "50+20");
        assert_eq!(result.matches[0].result, 70.0);
        assert_eq!(result.total, 70.0);
    }

    #[test]
    fn test_whole_line_expression() {
        let result = evaluate_note_expressions("12 * (3 + 4)");
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].expression, "12 * (3 + 4)");
        assert_eq!(result.matches[0].result, 84.0);
    }

    #[test]
    fn test_multi_line_aggregation() {
        let result = evaluate_note_expressions("Lunch 10+5\nTaxi 20\nHotel 100*2");
        let values: Vec<f64> = result.matches.iter().map(|m| m.result).collect();
        assert_eq!(values, vec![15.0, 20.0, 200.0]);
        assert_eq!(result.total, 235.0);
    }

    #[test]
    fn test_malformed_line_skipped_silently() {
        let result = evaluate_note_expressions("Total: 12++");
        assert!(result.is_empty());
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn test_division_by_zero_skipped() {
        let result = evaluate_note_expressions("x = 5/0");
        assert!(result.is_empty());
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn test_bad_line_does_not_affect_neighbours() {
        let result = evaluate_note_expressions("Lunch 10+5\nbroken 12++\nTaxi 20");
        let values: Vec<f64> = result.matches.iter().map(|m| m.result).collect();
        assert_eq!(values, vec![15.0, 20.0]);
        assert_eq!(result.total, 35.0);
    }

    #[test]
    fn test_deterministic() {
        let content = "Lunch 10+5\nnoise\nHotel 100*2\n 1/3";
        let first = evaluate_note_expressions(content);
        let second = evaluate_note_expressions(content);
        assert_eq!(first, second);
    }

    #[test]
    fn test_total_matches_sum_of_results() {
        let content = "a 0.1\nb 0.2\nc 0.3";
        let result = evaluate_note_expressions(content);
        let sum: f64 = result.matches.iter().map(|m| m.result).sum();
        assert_eq!(result.total, sum);
    }

    #[test]
    fn test_at_most_one_match_per_line() {
        let result = evaluate_note_expressions("1+1 then 2+2");
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].expression, "2+2");
    }
}
