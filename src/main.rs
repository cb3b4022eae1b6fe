//! Command-line front end for the note expression engine.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use notetally::calc::{EvaluationResult, evaluate_note_expressions, format_amount, format_raw};
use notetally::notes::NoteStore;

#[derive(Parser, Debug)]
#[command(
    name = "notetally",
    version,
    about = "Extracts and totals arithmetic expressions from note text"
)]
struct Args {
    /// File to read from; stdin when omitted.
    file: Option<PathBuf>,

    /// Treat the input as a JSON array of notes ({"title", "content"})
    /// instead of raw note content.
    #[arg(long)]
    notes: bool,

    /// Emit results as JSON.
    #[arg(long)]
    json: bool,
}

/// A note as it appears in JSON input; ids are assigned by the store.
#[derive(Debug, Deserialize)]
struct NoteInput {
    title: String,
    #[serde(default)]
    content: String,
}

/// Per-note output for `--notes --json`.
#[derive(Debug, Serialize)]
struct NoteReport {
    title: String,
    #[serde(flatten)]
    evaluation: EvaluationResult,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let input = read_input(args.file.as_deref())?;

    if args.notes {
        run_notes(&input, args.json)
    } else {
        run_content(&input, args.json)
    }
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn run_content(content: &str, json: bool) -> anyhow::Result<()> {
    let result = evaluate_note_expressions(content);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for m in &result.matches {
        println!("{} = {}", m.expression, format_raw(m.result));
    }
    println!("Total: {}", format_amount(result.total));
    Ok(())
}

fn run_notes(input: &str, json: bool) -> anyhow::Result<()> {
    let inputs: Vec<NoteInput> =
        serde_json::from_str(input).context("input is not a JSON array of notes")?;

    let mut store = NoteStore::new();
    // Insert in reverse so the store's newest-first order mirrors the input.
    for note in inputs.into_iter().rev() {
        store.add(note.title, note.content);
    }

    if json {
        let reports: Vec<NoteReport> = store
            .notes()
            .iter()
            .map(|n| NoteReport {
                title: n.title.clone(),
                evaluation: n.evaluation(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let mut grand_total = 0.0;
    for note in store.notes() {
        let total = note.total();
        grand_total += total;
        println!("{}: {}", note.title, format_amount(total));
    }
    println!("Total: {}", format_amount(grand_total));
    Ok(())
}
