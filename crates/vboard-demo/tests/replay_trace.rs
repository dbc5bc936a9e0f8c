use vboard_core::{BoardConfig, DropOutcome, PaletteAndCanvas, Workspace};
use vboard_demo::replay::{ReplaySummary, parse_trace, replay};
use vboard_window::{BoardView, RecordingScrollTarget};

const TRACE: &str = include_str!("../traces/palette_to_canvas.jsonl");

#[test]
fn bundled_trace_replays() {
    let config = BoardConfig::default();
    let mut ws = Workspace::new(&PaletteAndCanvas, &config).unwrap();
    let mut view = BoardView::<RecordingScrollTarget>::new(config.window);
    let steps = parse_trace(TRACE).unwrap();
    let mut out = Vec::new();

    let summary = replay(&mut ws, &mut view, &steps, &mut out, false).unwrap();

    assert_eq!(
        summary,
        ReplaySummary {
            steps: 11,
            drops: 3,
            changed: 2,
            scroll_resets: 2,
        }
    );
    let board = ws.snapshot();
    let canvas: Vec<_> = board.columns()[1]
        .items()
        .iter()
        .map(|item| item.text.as_str())
        .collect();
    assert_eq!(canvas, ["text-1", "canvas-1"]);
    assert_eq!(board.columns()[0].len(), 3);
    assert_eq!(ws.commits(), 2);
    // Two rows fit the viewport, so there is nothing to scroll.
    assert_eq!(view.slot(1).unwrap().window.scroll_offset(), 0);
}

#[test]
fn dropping_outside_reports_no_destination() {
    let mut ws = Workspace::new(&PaletteAndCanvas, &BoardConfig::default()).unwrap();
    let steps = parse_trace(
        r#"{"type":"drag_start","source":{"container":"canvas","index":0}}
{"type":"drag_end","destination":null}"#,
    )
    .unwrap();
    let mut view = BoardView::<RecordingScrollTarget>::new(BoardConfig::default().window);
    let summary = replay(&mut ws, &mut view, &steps, &mut Vec::new(), false).unwrap();
    assert_eq!(summary.drops, 1);
    assert_eq!(summary.changed, 0);
    assert!(!DropOutcome::Unchanged(vboard_core::NoOpReason::NoDestination).changed());
}
