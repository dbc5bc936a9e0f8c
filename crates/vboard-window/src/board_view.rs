#![forbid(unsafe_code)]

//! One window per board slot.
//!
//! [`BoardView`] keeps a [`WindowController`] and its renderer handle for
//! every column position on screen. After each commit, [`BoardView::sync`]
//! rebinds every slot to the column now at that position; slots whose column
//! changed (a column was dragged, inserted, or removed) are reset to offset 0.

use vboard_core::{Board, DragSession, WindowSettings};

use crate::controller::{Row, ScrollTarget, SlotKey, WindowController};

/// A column slot: its window state and the renderer it drives.
#[derive(Debug, Clone)]
pub struct Slot<T> {
    pub window: WindowController,
    pub target: T,
}

/// Windows for every column slot on the board.
#[derive(Debug, Clone)]
pub struct BoardView<T> {
    settings: WindowSettings,
    slots: Vec<Slot<T>>,
}

impl<T: ScrollTarget + Default> BoardView<T> {
    #[must_use]
    pub fn new(settings: WindowSettings) -> Self {
        Self {
            settings,
            slots: Vec::new(),
        }
    }

    /// Rebind slots to the board's current column order.
    ///
    /// Returns the slot positions whose scroll was reset.
    pub fn sync(&mut self, board: &Board) -> Vec<usize> {
        let columns = board.columns();
        self.slots.truncate(columns.len());
        while self.slots.len() < columns.len() {
            self.slots.push(Slot {
                window: WindowController::new(self.settings),
                target: T::default(),
            });
        }

        let mut reset = Vec::new();
        for (position, (slot, column)) in self.slots.iter_mut().zip(columns).enumerate() {
            let key = SlotKey::new(position, column.id.clone());
            if slot.window.bind(key, &mut slot.target) {
                reset.push(position);
            }
        }
        reset
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    #[must_use]
    pub fn slot(&self, position: usize) -> Option<&Slot<T>> {
        self.slots.get(position)
    }

    /// Scroll one slot, clamped against its column's current effective length.
    ///
    /// Returns the applied offset, or `None` if the slot does not exist.
    pub fn scroll_to(
        &mut self,
        position: usize,
        offset: u32,
        board: &Board,
        session: &DragSession,
    ) -> Option<u32> {
        let column = board.column_at(position)?;
        let slot = self.slots.get_mut(position)?;
        let len = slot.window.effective_len(column, session);
        let applied = slot.window.scroll_to(offset, len);
        slot.target.scroll_to(applied);
        Some(applied)
    }

    /// Rows to render in one slot.
    #[must_use]
    pub fn rows<'a>(
        &self,
        position: usize,
        board: &'a Board,
        session: &DragSession,
    ) -> Vec<Row<'a>> {
        match (self.slots.get(position), board.column_at(position)) {
            (Some(slot), Some(column)) => slot.window.rows(column, session),
            _ => Vec::new(),
        }
    }
}
