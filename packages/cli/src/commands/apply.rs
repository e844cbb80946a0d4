//! Replay an edit script against a presentation file.
//!
//! A script is a JSON array. Each step is one of:
//!
//! - a mutation object, e.g. `{"op": "renamePresentation", "title": "Q3"}`
//! - `"undo"` or `"redo"`
//! - `{"batch": "label", "steps": [<mutation>, ...]}`, one undo step
//!
//! Ids created while the script runs are random, so `"$slide"` in an id
//! field stands for the selected slide and `"$element"` for the first
//! selected element at the time the step runs.

use super::{read_presentation, resolve, write_presentation};
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Deserialize;
use serde_json::Value;
use slidecraft_document::Presentation;
use slidecraft_editor::{Action, EditorStore, Mutation, SystemClock, Transition};
use std::fs;
use std::path::PathBuf;

const SELECTED_SLIDE: &str = "$slide";
const SELECTED_ELEMENT: &str = "$element";

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Presentation file to edit
    pub input: PathBuf,

    /// Script file (JSON array of steps)
    pub script: PathBuf,

    /// Write the result here instead of back to the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Control {
    Undo,
    Redo,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Step {
    Control(Control),
    Batch { batch: String, steps: Vec<Value> },
    Mutate(Mutation),
}

#[derive(Debug, Default)]
struct Summary {
    committed: usize,
    coalesced: usize,
    undone: usize,
    redone: usize,
    unchanged: usize,
}

impl Summary {
    fn record(&mut self, transition: Transition) {
        match transition {
            Transition::Committed => self.committed += 1,
            Transition::Coalesced => self.coalesced += 1,
            Transition::Undone => self.undone += 1,
            Transition::Redone => self.redone += 1,
            Transition::Unchanged | Transition::Loaded => self.unchanged += 1,
        }
    }
}

pub fn apply(args: ApplyArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = resolve(cwd, &args.input);
    let output = args
        .output
        .map(|o| resolve(cwd, &o))
        .unwrap_or_else(|| input.clone());

    let script_path = resolve(cwd, &args.script);
    let script = fs::read_to_string(&script_path)
        .with_context(|| format!("Cannot read {}", script_path.display()))?;
    let steps: Vec<Value> = serde_json::from_str(&script)
        .with_context(|| format!("{} is not a JSON array", script_path.display()))?;

    let presentation = read_presentation(&input)?;
    let mut store = EditorStore::with_config(presentation, config.history(), Box::new(SystemClock));

    let summary = run_script(&mut store, &steps)?;
    write_presentation(&output, store.current())?;

    println!(
        "  {} Applied {} steps to {}",
        "✓".green(),
        steps.len(),
        output.display()
    );
    println!(
        "     {} committed, {} coalesced, {} undone, {} redone, {} unchanged",
        summary.committed, summary.coalesced, summary.undone, summary.redone, summary.unchanged
    );
    Ok(())
}

fn run_script(store: &mut EditorStore, steps: &[Value]) -> Result<Summary> {
    let mut summary = Summary::default();

    for (i, raw) in steps.iter().enumerate() {
        let step = parse_step(raw, store.current()).with_context(|| format!("Step {}", i))?;
        match step {
            Step::Control(Control::Undo) => summary.record(store.dispatch(Action::Undo)),
            Step::Control(Control::Redo) => summary.record(store.dispatch(Action::Redo)),
            Step::Mutate(mutation) => summary.record(store.dispatch(mutation)),
            Step::Batch { batch, steps } => {
                store.begin_batch(batch);
                for (j, raw) in steps.iter().enumerate() {
                    let mutation: Mutation =
                        serde_json::from_value(resolve_placeholders(raw, store.current()))
                            .with_context(|| format!("Step {}.{}", i, j))?;
                    summary.record(store.dispatch(mutation));
                }
                store.end_batch();
            }
        }
    }

    Ok(summary)
}

fn parse_step(raw: &Value, current: &Presentation) -> Result<Step> {
    Ok(serde_json::from_value(resolve_placeholders(raw, current))?)
}

/// Substitute `$slide` / `$element` in the id fields of one mutation object.
fn resolve_placeholders(raw: &Value, current: &Presentation) -> Value {
    let mut value = raw.clone();
    let Some(fields) = value.as_object_mut() else {
        return value;
    };

    let lookup = |s: &str| -> Option<String> {
        match s {
            SELECTED_SLIDE => current.selection.slide_id.clone(),
            SELECTED_ELEMENT => current.selection.element_ids.first().cloned(),
            _ => None,
        }
    };

    for key in ["slideId", "elementId", "targetId"] {
        let replacement = match fields.get(key) {
            Some(Value::String(s)) => lookup(s),
            _ => None,
        };
        if let Some(id) = replacement {
            fields.insert(key.to_string(), Value::String(id));
        }
    }
    for key in ["slideIds", "elementIds"] {
        if let Some(Value::Array(items)) = fields.get_mut(key) {
            for item in items.iter_mut() {
                if let Some(id) = item.as_str().and_then(lookup) {
                    *item = Value::String(id);
                }
            }
        }
    }
    value
}
