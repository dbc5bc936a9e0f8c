#![forbid(unsafe_code)]

//! Plain-text presentation of every slot's visible window.
//!
//! One header per column, then one line per rendered row:
//!
//! ```text
//! == Canvas [canvas] offset=0 rows=0..2/2
//!    0  canvas-1
//!    1  ·
//! ```
//!
//! `·` marks the placeholder slot, `~` the original of the dragged item.

use std::io::{self, Write};

use vboard_core::{Board, ColumnKind, DragSession};
use vboard_window::{BoardView, RowSlot, ScrollTarget};

const PLACEHOLDER: &str = "·";

pub fn render_board<T, W>(
    out: &mut W,
    board: &Board,
    view: &BoardView<T>,
    session: &DragSession,
) -> io::Result<()>
where
    T: ScrollTarget + Default,
    W: Write,
{
    for (position, column) in board.columns().iter().enumerate() {
        let Some(slot) = view.slot(position) else {
            continue;
        };
        let len = slot.window.effective_len(column, session);
        let range = slot.window.rendered_range(len);
        let kind = match column.kind {
            ColumnKind::Palette => " (palette)",
            ColumnKind::Canvas => "",
        };
        let moving = if session.dragged_column() == Some(position) {
            " ~"
        } else {
            ""
        };
        writeln!(
            out,
            "== {} [{}]{kind}{moving} offset={} rows={}..{}/{len}",
            column.title,
            column.id,
            slot.window.scroll_offset(),
            range.start,
            range.end,
        )?;
        for row in view.rows(position, board, session) {
            match row.slot {
                RowSlot::Placeholder => writeln!(out, "  {:>3}  {PLACEHOLDER}", row.index)?,
                RowSlot::Item(item) => {
                    let marker = if row.is_dragged { "~" } else { " " };
                    writeln!(out, " {marker}{:>3}  {}", row.index, item.text)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vboard_core::{DragKind, InitialData, Location, PaletteAndCanvas, WindowSettings};
    use vboard_window::RecordingScrollTarget;

    fn render(board: &Board, session: &DragSession) -> String {
        let mut view = BoardView::<RecordingScrollTarget>::new(WindowSettings::default());
        view.sync(board);
        let mut out = Vec::new();
        render_board(&mut out, board, &view, session).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn idle_board_lists_every_item() {
        let board = PaletteAndCanvas.board().unwrap();
        let text = render(&board, &DragSession::new());
        assert!(text.contains("== Web Components [web-component] (palette) offset=0 rows=0..3/3"));
        assert!(text.contains("== Canvas [canvas] offset=0 rows=0..1/1"));
        assert!(text.contains("    1  text-1"));
        assert!(!text.contains(PLACEHOLDER));
    }

    #[test]
    fn drag_shows_placeholder_and_marks_source() {
        let board = PaletteAndCanvas.board().unwrap();
        let mut session = DragSession::new();
        session.start(DragKind::Item, Location::new("web-component", 0));
        session.update(Some(Location::new("canvas", 0)));
        let text = render(&board, &session);
        assert!(text.contains(" ~  0  jumbotron-1"));
        assert!(text.contains("    0  ·"));
        assert!(text.contains("    1  canvas-1"));
        assert!(text.contains("rows=0..2/2"));
    }
}
