//! notetally: a note engine that finds arithmetic expressions at the end of
//! note lines, evaluates them safely, and sums them into a running total.
//!
//! The core entry point is [`calc::evaluate_note_expressions`], which takes
//! raw note content and returns the ordered matches plus their total. The
//! [`notes`] module layers a simple note model and in-memory store on top.

pub mod calc;
pub mod notes;
