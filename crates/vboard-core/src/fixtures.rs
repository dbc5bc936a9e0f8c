#![forbid(unsafe_code)]

//! Initial data providers.
//!
//! A workspace asks its provider for a board exactly once, at startup.

use crate::model::{Board, Column, ColumnKind, Item, ModelError};

/// Supplies the starting board.
pub trait InitialData {
    fn board(&self) -> Result<Board, ModelError>;
}

impl InitialData for Board {
    fn board(&self) -> Result<Board, ModelError> {
        Ok(self.clone())
    }
}

/// Id of the read-only component palette.
pub const PALETTE_ID: &str = "web-component";
/// Id of the mutable canvas.
pub const CANVAS_ID: &str = "canvas";

/// A component palette next to a one-item canvas.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteAndCanvas;

impl InitialData for PaletteAndCanvas {
    fn board(&self) -> Result<Board, ModelError> {
        let palette = Column::new(
            PALETTE_ID,
            "Web Components",
            ColumnKind::Palette,
            ["jumbotron-1", "text-1", "footer"]
                .into_iter()
                .map(|name| Item::new(name, name))
                .collect::<Vec<_>>(),
        );
        let canvas = Column::new(
            CANVAS_ID,
            "Canvas",
            ColumnKind::Canvas,
            vec![Item::new("canvas-1", "canvas-1")],
        );
        Board::new(vec![palette, canvas])
    }
}

/// `columns` canvas columns of `items_per_column` numbered items each.
///
/// Item ids (`id:N`) and texts (`item N`) are numbered continuously across
/// columns, so every id is unique on the board.
#[derive(Debug, Clone, Copy)]
pub struct GeneratedColumns {
    pub columns: usize,
    pub items_per_column: usize,
}

impl Default for GeneratedColumns {
    fn default() -> Self {
        Self {
            columns: 2,
            items_per_column: 5,
        }
    }
}

const ORDINALS: [&str; 10] = [
    "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth", "Tenth",
];

fn column_title(position: usize) -> String {
    match ORDINALS.get(position) {
        Some(ordinal) => format!("{ordinal} column"),
        None => format!("Column {}", position + 1),
    }
}

impl InitialData for GeneratedColumns {
    fn board(&self) -> Result<Board, ModelError> {
        let mut next = 0usize;
        let columns = (0..self.columns)
            .map(|position| {
                let items: Vec<Item> = (0..self.items_per_column)
                    .map(|_| {
                        let n = next;
                        next += 1;
                        Item::new(format!("id:{n}"), format!("item {n}"))
                    })
                    .collect();
                Column::new(
                    format!("column-{position}"),
                    column_title(position),
                    ColumnKind::Canvas,
                    items,
                )
            })
            .collect();
        Board::new(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_and_canvas_layout() {
        let board = PaletteAndCanvas.board().unwrap();
        assert_eq!(board.columns().len(), 2);
        let palette = board.column(&PALETTE_ID.into()).unwrap();
        assert!(palette.kind.is_read_only());
        assert_eq!(palette.items()[1].text, "text-1");
        assert_eq!(board.column(&CANVAS_ID.into()).unwrap().len(), 1);
    }

    #[test]
    fn generated_columns_number_continuously() {
        let board = GeneratedColumns::default().board().unwrap();
        assert_eq!(board.columns()[0].title, "First column");
        assert_eq!(board.columns()[1].title, "Second column");
        assert_eq!(board.columns()[1].items()[0].id.as_str(), "id:5");
        assert_eq!(board.columns()[1].items()[4].text, "item 9");
    }

    #[test]
    fn generated_titles_fall_back_past_ordinals() {
        let board = GeneratedColumns {
            columns: 12,
            items_per_column: 0,
        }
        .board()
        .unwrap();
        assert_eq!(board.columns()[11].title, "Column 12");
        assert_eq!(board.columns()[11].id.as_str(), "column-11");
    }
}
