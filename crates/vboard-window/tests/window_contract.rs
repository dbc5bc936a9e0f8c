//! Window behavior driven through a live workspace.
//!
//! Covers placeholder reservation during a drag, its release on cancel, and
//! scroll reset when a slot is rebound to a different column.

use vboard_core::fixtures::{CANVAS_ID, PALETTE_ID};
use vboard_core::{
    BoardConfig, DragKind, GeneratedColumns, Location, PaletteAndCanvas, WindowSettings, Workspace,
};
use vboard_window::{BoardView, RecordingScrollTarget, RowSlot, SlotKey, WindowController};

fn settings() -> WindowSettings {
    WindowSettings {
        row_height: 80,
        viewport_height: 500,
        overscan: 0,
        grid: 8,
    }
}

#[test]
fn cancel_returns_effective_len_to_pre_drag_value() {
    let mut ws = Workspace::new(&PaletteAndCanvas, &BoardConfig::default()).unwrap();
    let window = WindowController::new(settings());
    let board = ws.snapshot();
    let canvas = board.column(&CANVAS_ID.into()).unwrap();
    let before = window.effective_len(canvas, ws.session());

    ws.on_drag_start(DragKind::Item, Location::new(PALETTE_ID, 0));
    ws.on_drag_update(Some(Location::new(CANVAS_ID, 0)));
    assert_eq!(window.effective_len(canvas, ws.session()), before + 1);

    ws.on_drag_end(None);
    let board = ws.snapshot();
    let canvas = board.column(&CANVAS_ID.into()).unwrap();
    assert_eq!(window.effective_len(canvas, ws.session()), before);
    assert!(
        window
            .rows(canvas, ws.session())
            .iter()
            .all(|row| !row.is_placeholder())
    );
}

#[test]
fn only_the_destination_reserves_space() {
    let mut ws = Workspace::new(&PaletteAndCanvas, &BoardConfig::default()).unwrap();
    let window = WindowController::new(settings());
    ws.on_drag_start(DragKind::Item, Location::new(PALETTE_ID, 1));
    ws.on_drag_update(Some(Location::new(CANVAS_ID, 1)));

    let board = ws.snapshot();
    let palette = board.column(&PALETTE_ID.into()).unwrap();
    let canvas = board.column(&CANVAS_ID.into()).unwrap();
    assert_eq!(window.effective_len(palette, ws.session()), 3);
    assert_eq!(window.effective_len(canvas, ws.session()), 2);

    let palette_rows = window.rows(palette, ws.session());
    assert!(palette_rows[1].is_dragged);
    let canvas_rows = window.rows(canvas, ws.session());
    assert_eq!(canvas_rows.len(), 2);
    assert!(matches!(canvas_rows[1].slot, RowSlot::Placeholder));
}

#[test]
fn drop_replaces_placeholder_with_real_item() {
    let mut ws = Workspace::new(&PaletteAndCanvas, &BoardConfig::default()).unwrap();
    let window = WindowController::new(settings());
    ws.on_drag_start(DragKind::Item, Location::new(PALETTE_ID, 1));
    ws.on_drag_update(Some(Location::new(CANVAS_ID, 1)));
    ws.on_drag_end(Some(Location::new(CANVAS_ID, 1)));

    let board = ws.snapshot();
    let canvas = board.column(&CANVAS_ID.into()).unwrap();
    let rows = window.rows(canvas, ws.session());
    assert_eq!(rows.len(), 2);
    match rows[1].slot {
        RowSlot::Item(item) => assert_eq!(item.text, "text-1"),
        RowSlot::Placeholder => panic!("placeholder survived the drop"),
    }
}

#[test]
fn rebinding_slot_to_different_column_reports_zero_offset() {
    let mut window = WindowController::new(settings());
    let mut target = RecordingScrollTarget::default();
    window.bind(SlotKey::new(0, "column-0".into()), &mut target);
    window.scroll_to(400, 100);
    assert_eq!(window.scroll_offset(), 400);

    window.bind(SlotKey::new(1, "column-1".into()), &mut target);
    assert_eq!(window.scroll_offset(), 0);
    assert_eq!(target.last(), Some(0));
}

#[test]
fn column_drag_resets_windows_of_moved_columns() {
    let mut ws = Workspace::new(
        &GeneratedColumns {
            columns: 2,
            items_per_column: 50,
        },
        &BoardConfig::default(),
    )
    .unwrap();
    let mut view = BoardView::<RecordingScrollTarget>::new(settings());
    view.sync(&ws.snapshot());
    view.scroll_to(0, 800, &ws.snapshot(), ws.session());
    view.scroll_to(1, 1600, &ws.snapshot(), ws.session());

    ws.on_drag_start(DragKind::Column, Location::new(vboard_core::BOARD_CONTAINER, 0));
    ws.on_drag_update(Some(Location::new(vboard_core::BOARD_CONTAINER, 1)));
    // Starting a drag never touches scroll.
    assert_eq!(view.slot(0).unwrap().window.scroll_offset(), 800);
    ws.on_drag_end(Some(Location::new(vboard_core::BOARD_CONTAINER, 1)));

    let board = ws.snapshot();
    assert_eq!(view.sync(&board), [0, 1]);
    let rows = view.rows(0, &board, ws.session());
    assert_eq!(rows[0].item_index, Some(0));
    match rows[0].slot {
        RowSlot::Item(item) => assert_eq!(item.id.as_str(), "id:50"),
        RowSlot::Placeholder => panic!("unexpected placeholder"),
    }
}
