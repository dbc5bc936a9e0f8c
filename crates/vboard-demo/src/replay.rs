#![forbid(unsafe_code)]

//! Gesture trace replay.
//!
//! A trace is JSON lines. Each line is either a gesture event or a scroll:
//!
//! ```text
//! {"type":"drag_start","source":{"container":"web-component","index":1}}
//! {"type":"drag_update","destination":{"container":"canvas","index":1}}
//! {"type":"drag_end","destination":{"container":"canvas","index":1}}
//! {"type":"scroll","slot":1,"offset":160}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use std::io::Write;

use serde::Deserialize;
use vboard_core::{DropOutcome, GestureEvent, Workspace};
use vboard_window::{BoardView, RecordingScrollTarget};

use crate::error::{CliError, Result};
use crate::render::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ScrollTag {
    Scroll,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct ScrollLine {
    #[serde(rename = "type")]
    _tag: ScrollTag,
    slot: usize,
    offset: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum TraceLine {
    Gesture(GestureEvent),
    Scroll(ScrollLine),
}

/// One replayable step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceStep {
    Gesture(GestureEvent),
    Scroll { slot: usize, offset: u32 },
}

impl From<TraceLine> for TraceStep {
    fn from(line: TraceLine) -> Self {
        match line {
            TraceLine::Gesture(event) => Self::Gesture(event),
            TraceLine::Scroll(scroll) => Self::Scroll {
                slot: scroll.slot,
                offset: scroll.offset,
            },
        }
    }
}

/// Parse a JSON-lines trace. Line numbers in errors are 1-based.
pub fn parse_trace(text: &str) -> Result<Vec<TraceStep>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(number, line)| {
            serde_json::from_str::<TraceLine>(line)
                .map(TraceStep::from)
                .map_err(|source| CliError::TraceParse {
                    line: number + 1,
                    source,
                })
        })
        .collect()
}

/// Totals for a replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub steps: usize,
    pub drops: usize,
    pub changed: usize,
    pub scroll_resets: usize,
}

/// Drive `workspace` and `view` through `steps`.
///
/// The view is resynced after every finished drag, before anything is
/// rendered. With `show_steps`, the windows are printed after each step.
pub fn replay<W: Write>(
    workspace: &mut Workspace,
    view: &mut BoardView<RecordingScrollTarget>,
    steps: &[TraceStep],
    out: &mut W,
    show_steps: bool,
) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();
    summary.scroll_resets += view.sync(&workspace.snapshot()).len();

    for (index, step) in steps.iter().enumerate() {
        summary.steps += 1;
        match step {
            TraceStep::Gesture(event) => {
                if let Some(outcome) = workspace.handle(event) {
                    summary.drops += 1;
                    if outcome.changed() {
                        summary.changed += 1;
                    }
                    summary.scroll_resets += view.sync(&workspace.snapshot()).len();
                    log_outcome(index, &outcome);
                }
            }
            TraceStep::Scroll { slot, offset } => {
                let board = workspace.snapshot();
                if view
                    .scroll_to(*slot, *offset, &board, workspace.session())
                    .is_none()
                {
                    tracing::warn!(message = "replay.scroll.unknown_slot", slot);
                }
            }
        }
        if show_steps {
            writeln!(out, "-- step {} --", index + 1)?;
            render_board(out, &workspace.snapshot(), view, workspace.session())?;
        }
    }
    Ok(summary)
}

fn log_outcome(step: usize, outcome: &DropOutcome) {
    tracing::info!(message = "replay.drop", step, outcome = ?outcome);
}
