#![forbid(unsafe_code)]

//! Per-column window controller.
//!
//! A [`WindowController`] sits between one column slot and the windowed
//! renderer for that slot. It decides which rows are rendered, inserts the
//! placeholder row while the column is the live drop destination, and
//! forces the renderer back to offset 0 whenever the slot is rebound to a
//! different column.
//!
//! # Scroll reset
//!
//! Windowed renderers keep their own scroll bookkeeping. After the column
//! shown in a slot changes identity, that bookkeeping and the visual
//! position disagree, and the rows drawn no longer match the scroll thumb.
//! [`WindowController::bind`] therefore resets to 0 and pushes the reset to
//! the renderer through [`ScrollTarget`] before the next paint. A change in
//! the column's items alone does not count as an identity change.
//!
//! # Invariants
//!
//! 1. `scroll_offset() <= max_scroll_offset(effective_len, ..)` after every
//!    `scroll_to` / `scroll_by`.
//! 2. A placeholder row never carries an item index.
//! 3. Row `item_index` values are real indices into the column's items,
//!    usable directly in a later drag result.
//! 4. Among the rows that are not the dragged original, the placeholder sits
//!    exactly where the drop will insert the item.

use std::ops::Range;

use vboard_core::{Column, ColumnId, DragSession, Item, WindowSettings};

use crate::geometry::RowGeometry;
use crate::range::{clamp_offset, effective_len, visible_range, with_overscan};

/// Identity of what a slot displays: its position and the column bound to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub slot: usize,
    pub column: ColumnId,
}

impl SlotKey {
    #[must_use]
    pub fn new(slot: usize, column: ColumnId) -> Self {
        Self { slot, column }
    }
}

/// Imperative scroll control exposed by the windowed renderer.
pub trait ScrollTarget {
    fn scroll_to(&mut self, offset: u32);
}

/// Scroll target that records every call. Useful headless and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingScrollTarget {
    pub calls: Vec<u32>,
}

impl RecordingScrollTarget {
    /// Last offset the renderer was told to scroll to.
    #[must_use]
    pub fn last(&self) -> Option<u32> {
        self.calls.last().copied()
    }
}

impl ScrollTarget for RecordingScrollTarget {
    fn scroll_to(&mut self, offset: u32) {
        self.calls.push(offset);
    }
}

/// What occupies a rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSlot<'a> {
    Item(&'a Item),
    /// Reserved space for the item being dragged in. Renders nothing.
    Placeholder,
}

/// One rendered row of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    /// Visual position in the (possibly placeholder-extended) list.
    pub index: usize,
    pub slot: RowSlot<'a>,
    /// Index into the column's items; `None` for the placeholder.
    pub item_index: Option<usize>,
    /// The original of the item currently being dragged. The presentation
    /// layer hides it while the floating clone is shown.
    pub is_dragged: bool,
    /// Offset of the row's top edge from the top of the list content.
    pub top: u32,
}

impl Row<'_> {
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self.slot, RowSlot::Placeholder)
    }

    /// Geometry assigned by the window, for a list `width` wide.
    #[must_use]
    pub fn virtual_geometry(&self, width: u32, row_height: u32) -> RowGeometry {
        RowGeometry::new(0, self.top, width, row_height)
    }
}

/// Window state for one column slot.
#[derive(Debug, Clone)]
pub struct WindowController {
    settings: WindowSettings,
    key: Option<SlotKey>,
    scroll_offset: u32,
    resets: u64,
}

impl WindowController {
    #[must_use]
    pub fn new(settings: WindowSettings) -> Self {
        Self {
            settings,
            key: None,
            scroll_offset: 0,
            resets: 0,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &WindowSettings {
        &self.settings
    }

    #[must_use]
    pub fn key(&self) -> Option<&SlotKey> {
        self.key.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    /// Number of identity-change resets performed.
    #[must_use]
    pub fn resets(&self) -> u64 {
        self.resets
    }

    /// Bind this window to a slot/column pair.
    ///
    /// If the identity differs from the current binding the offset is forced
    /// to 0 and `target` is told to scroll to 0. Returns whether a reset
    /// happened.
    pub fn bind(&mut self, key: SlotKey, target: &mut dyn ScrollTarget) -> bool {
        if self.key.as_ref() == Some(&key) {
            return false;
        }
        tracing::debug!(
            message = "window.reset",
            slot = key.slot,
            column = %key.column,
            previous_offset = self.scroll_offset
        );
        self.key = Some(key);
        self.scroll_offset = 0;
        self.resets = self.resets.saturating_add(1);
        target.scroll_to(0);
        true
    }

    /// Item count including the placeholder this column currently reserves.
    #[must_use]
    pub fn effective_len(&self, column: &Column, session: &DragSession) -> usize {
        effective_len(column.len(), session.placeholder_index(&column.id))
    }

    /// Scroll to an absolute offset, clamped for a list of `len` rows.
    pub fn scroll_to(&mut self, offset: u32, len: usize) -> u32 {
        self.scroll_offset = clamp_offset(
            len,
            offset,
            self.settings.viewport_height,
            self.settings.row_height,
        );
        self.scroll_offset
    }

    /// Scroll by a signed delta, clamped for a list of `len` rows.
    pub fn scroll_by(&mut self, delta: i64, len: usize) -> u32 {
        let target = i64::from(self.scroll_offset).saturating_add(delta).max(0);
        let target = u32::try_from(target).unwrap_or(u32::MAX);
        self.scroll_to(target, len)
    }

    /// Rows intersecting the viewport for a list of `len` rows.
    #[must_use]
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        visible_range(
            len,
            self.scroll_offset,
            self.settings.viewport_height,
            self.settings.row_height,
        )
    }

    /// Visible rows plus overscan.
    #[must_use]
    pub fn rendered_range(&self, len: usize) -> Range<usize> {
        with_overscan(self.visible_range(len), self.settings.overscan, len)
    }

    /// The rows to render for `column` given the live drag session.
    #[must_use]
    pub fn rows<'a>(&self, column: &'a Column, session: &DragSession) -> Vec<Row<'a>> {
        let placeholder = placeholder_row(column, session);
        let dragged = session.dragged_index(&column.id);
        let len = effective_len(column.len(), placeholder);
        let row_height = self.settings.row_height;

        self.rendered_range(len)
            .map(|index| {
                let (slot, item_index) = match placeholder {
                    Some(p) if index == p => (RowSlot::Placeholder, None),
                    Some(p) if index > p => (RowSlot::Item(&column.items()[index - 1]), Some(index - 1)),
                    _ => (RowSlot::Item(&column.items()[index]), Some(index)),
                };
                let top = u32::try_from(index)
                    .unwrap_or(u32::MAX)
                    .saturating_mul(row_height);
                Row {
                    index,
                    slot,
                    item_index,
                    is_dragged: item_index.is_some() && item_index == dragged,
                    top,
                }
            })
            .collect()
    }
}

/// Row at which `column` shows its placeholder.
///
/// Destination indices of a same-column drag count positions with the dragged
/// original removed. The original still occupies its row while dragging, so
/// a destination past it sits one row further down.
fn placeholder_row(column: &Column, session: &DragSession) -> Option<usize> {
    let destination = session.placeholder_index(&column.id)?;
    let row = match session.dragged_index(&column.id) {
        Some(source) if destination > source => destination.saturating_add(1),
        _ => destination,
    };
    Some(row.min(column.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;
    use vboard_core::{ColumnKind, DragKind, Location};

    fn settings() -> WindowSettings {
        WindowSettings {
            row_height: 10,
            viewport_height: 30,
            overscan: 0,
            grid: 2,
        }
    }

    fn column(len: usize) -> Column {
        let items: Vec<Item> = (0..len)
            .map(|i| Item::new(format!("c{i}"), format!("row {i}")))
            .collect();
        Column::new("canvas", "Canvas", ColumnKind::Canvas, items)
    }

    fn key(slot: usize, column: &str) -> SlotKey {
        SlotKey::new(slot, ColumnId::new(column))
    }

    fn labels(rows: &[Row<'_>]) -> Vec<String> {
        rows.iter()
            .map(|row| match row.slot {
                RowSlot::Item(item) if row.is_dragged => format!("({})", item.id),
                RowSlot::Item(item) => item.id.to_string(),
                RowSlot::Placeholder => "_".to_owned(),
            })
            .collect()
    }

    #[traced_test]
    #[test]
    fn rebinding_to_another_column_resets_scroll() {
        let mut window = WindowController::new(settings());
        let mut target = RecordingScrollTarget::default();
        assert!(window.bind(key(1, "a"), &mut target));
        window.scroll_to(50, 20);
        assert_eq!(window.scroll_offset(), 50);

        assert!(window.bind(key(1, "b"), &mut target));
        assert_eq!(window.scroll_offset(), 0);
        assert_eq!(target.calls, [0, 0]);
        assert_eq!(window.resets(), 2);
        assert!(logs_contain("window.reset"));
    }

    #[test]
    fn rebinding_same_identity_keeps_scroll() {
        let mut window = WindowController::new(settings());
        let mut target = RecordingScrollTarget::default();
        window.bind(key(0, "a"), &mut target);
        window.scroll_to(40, 20);
        assert!(!window.bind(key(0, "a"), &mut target));
        assert_eq!(window.scroll_offset(), 40);
        assert_eq!(target.calls.len(), 1);
    }

    #[test]
    fn moving_slot_resets_even_for_same_column() {
        let mut window = WindowController::new(settings());
        let mut target = RecordingScrollTarget::default();
        window.bind(key(0, "a"), &mut target);
        window.scroll_to(40, 20);
        assert!(window.bind(key(2, "a"), &mut target));
        assert_eq!(window.scroll_offset(), 0);
    }

    #[test]
    fn scroll_clamps_to_content() {
        let mut window = WindowController::new(settings());
        assert_eq!(window.scroll_to(1000, 5), 20);
        assert_eq!(window.scroll_by(-15, 5), 5);
        assert_eq!(window.scroll_by(-100, 5), 0);
        assert_eq!(window.scroll_by(i64::MAX, 5), 20);
    }

    #[test]
    fn idle_rows_map_one_to_one() {
        let window = WindowController::new(settings());
        let col = column(5);
        let session = DragSession::new();
        let rows = window.rows(&col, &session);
        assert_eq!(labels(&rows), ["c0", "c1", "c2"]);
        assert_eq!(rows[2].top, 20);
        assert_eq!(rows[2].item_index, Some(2));
    }

    #[test]
    fn placeholder_is_inserted_at_destination() {
        let window = WindowController::new(settings());
        let col = column(5);
        let mut session = DragSession::new();
        session.start(DragKind::Item, Location::new("palette", 0));
        session.update(Some(Location::new("canvas", 1)));

        assert_eq!(window.effective_len(&col, &session), 6);
        let rows = window.rows(&col, &session);
        assert_eq!(labels(&rows), ["c0", "_", "c1"]);
        assert!(rows[1].is_placeholder());
        assert_eq!(rows[1].item_index, None);
        assert_eq!(rows[2].item_index, Some(1));
    }

    fn tall() -> WindowController {
        WindowController::new(WindowSettings {
            viewport_height: 100,
            ..settings()
        })
    }

    #[test]
    fn dragged_original_is_flagged() {
        let window = WindowController::new(settings());
        let col = column(5);
        let mut session = DragSession::new();
        session.start(DragKind::Item, Location::new("canvas", 1));
        let rows = window.rows(&col, &session);
        assert_eq!(labels(&rows), ["c0", "_", "(c1)"]);
    }

    #[test]
    fn forward_move_placeholder_follows_drop_position() {
        let col = column(3);
        let mut session = DragSession::new();
        session.start(DragKind::Item, Location::new("canvas", 0));
        session.update(Some(Location::new("canvas", 2)));
        // The drop commits [c1, c2, c0].
        assert_eq!(labels(&tall().rows(&col, &session)), ["(c0)", "c1", "c2", "_"]);

        session.update(Some(Location::new("canvas", 1)));
        assert_eq!(labels(&tall().rows(&col, &session)), ["(c0)", "c1", "_", "c2"]);
    }

    #[test]
    fn backward_move_placeholder_precedes_target() {
        let col = column(3);
        let mut session = DragSession::new();
        session.start(DragKind::Item, Location::new("canvas", 2));
        session.update(Some(Location::new("canvas", 0)));
        // The drop commits [c2, c0, c1].
        assert_eq!(labels(&tall().rows(&col, &session)), ["_", "c0", "c1", "(c2)"]);
    }

    #[test]
    fn placeholder_past_end_lands_last() {
        let window = tall();
        let col = column(2);
        let mut session = DragSession::new();
        session.start(DragKind::Item, Location::new("palette", 0));
        session.update(Some(Location::new("canvas", 9)));
        assert_eq!(labels(&window.rows(&col, &session)), ["c0", "c1", "_"]);
    }

    #[test]
    fn empty_column_shows_only_placeholder() {
        let window = WindowController::new(settings());
        let col = column(0);
        let mut session = DragSession::new();
        session.start(DragKind::Item, Location::new("palette", 0));
        session.update(Some(Location::new("canvas", 0)));
        assert_eq!(labels(&window.rows(&col, &session)), ["_"]);
        session.end(None);
        assert!(window.rows(&col, &session).is_empty());
    }

    #[test]
    fn overscan_extends_rendered_rows() {
        let mut window = WindowController::new(WindowSettings {
            overscan: 1,
            ..settings()
        });
        window.scroll_to(30, 10);
        assert_eq!(window.visible_range(10), 3..6);
        assert_eq!(window.rendered_range(10), 2..7);
    }
}
