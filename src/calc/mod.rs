//! Expression extraction and evaluation for note content.
//!
//! This module provides functionality to:
//! - Detect the trailing arithmetic fragment of each note line
//! - Evaluate fragments with a restricted recursive-descent parser
//! - Aggregate the results into per-note matches and a running total

mod detection;
mod evaluation;
mod format;
mod scan;

pub use detection::trailing_expression;
pub use evaluation::{EvalError, evaluate_expression};
pub use format::{format_amount, format_raw};
pub use scan::{EvaluationResult, ExpressionMatch, evaluate_note_expressions};
