#![forbid(unsafe_code)]

//! Reorder/transfer engine: `(board, drag result) -> board'`.
//!
//! [`apply_drag_result`] never mutates its input. Columns it does not touch
//! keep sharing their item sequences with the input board, and a result that
//! changes nothing returns a board equal to the input.
//!
//! # Rules for item drags
//!
//! | Case | Result |
//! |------|--------|
//! | No destination | unchanged |
//! | Destination is a palette | unchanged |
//! | Same column, same index | unchanged |
//! | Same column, different index | remove at source, insert at destination |
//! | Palette source, other column | copy with a fresh id, insert |
//! | Canvas source, other column | copy (or move, per [`TransferPolicy`]) |
//! | Unknown column / index out of bounds | unchanged |
//! | Copy needed but the id generator is exhausted | unchanged |
//!
//! Same-column moves are a single-element move, not a swap: the items
//! between the two indices shift by one to close the gap.

use serde::{Deserialize, Serialize};

use crate::drag::{DragKind, DragResult, Location};
use crate::ids::IdGenerator;
use crate::model::{Board, Column, ItemId};

/// How an item dropped into a different column is materialized there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferPolicy {
    /// Insert a copy with a fresh id; the source column is untouched.
    #[default]
    Copy,
    /// Remove from the source and insert with the same id.
    /// Palette sources are still copied.
    Move,
}

/// Why a drag result left the board unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// Released outside every drop target (or cancelled).
    NoDestination,
    /// Destination column does not accept drops.
    ReadOnlyDestination,
    /// Dropped back on the slot it came from.
    SamePosition,
    /// Source or destination column is not on the board.
    UnknownColumn,
    /// Index does not fit the column's current length (stale gesture).
    IndexOutOfBounds,
    /// A copy needed a fresh id and the generator has none left.
    IdsExhausted,
}

/// What [`apply_drag_result`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Unchanged(NoOpReason),
    /// Item moved within its own column.
    Reordered { from: usize, to: usize },
    /// Copy of the source item inserted with a new id.
    Copied { new_id: ItemId },
    /// Item removed from its column and inserted into another, same id.
    Transferred { id: ItemId },
    /// Column moved to a new board position.
    ColumnMoved { from: usize, to: usize },
}

impl DropOutcome {
    #[must_use]
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Unchanged(_))
    }
}

/// Next board plus a description of the change.
#[derive(Debug, Clone)]
pub struct Applied {
    pub board: Board,
    pub outcome: DropOutcome,
}

impl Applied {
    fn unchanged(board: &Board, reason: NoOpReason) -> Self {
        Self {
            board: board.clone(),
            outcome: DropOutcome::Unchanged(reason),
        }
    }
}

/// Remove the element at `from`, then insert it at `to` in the shortened
/// sequence. Callers guarantee `from < len` and `to < len`.
#[must_use]
pub fn move_element<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut next = items.to_vec();
    let moved = next.remove(from);
    next.insert(to, moved);
    next
}

/// Compute the board that results from a finished drag.
pub fn apply_drag_result(
    board: &Board,
    result: &DragResult,
    ids: &mut IdGenerator,
    policy: TransferPolicy,
) -> Applied {
    let applied = match result.kind {
        DragKind::Item => apply_item_drag(board, result, ids, policy),
        DragKind::Column => apply_column_drag(board, result),
    };
    match &applied.outcome {
        DropOutcome::Unchanged(reason) => tracing::debug!(
            message = "reorder.noop",
            reason = ?reason,
            source = %result.source.container,
            source_index = result.source.index
        ),
        outcome => tracing::debug!(
            message = "reorder.apply",
            outcome = ?outcome,
            source = %result.source.container,
            source_index = result.source.index
        ),
    }
    applied
}

fn apply_item_drag(
    board: &Board,
    result: &DragResult,
    ids: &mut IdGenerator,
    policy: TransferPolicy,
) -> Applied {
    let Some(destination) = &result.destination else {
        return Applied::unchanged(board, NoOpReason::NoDestination);
    };
    let (Some(source_col), Some(dest_col)) = (
        board.column(&result.source.container),
        board.column(&destination.container),
    ) else {
        return Applied::unchanged(board, NoOpReason::UnknownColumn);
    };
    if dest_col.kind.is_read_only() {
        return Applied::unchanged(board, NoOpReason::ReadOnlyDestination);
    }
    let source = &result.source;
    if source.index >= source_col.len() {
        return Applied::unchanged(board, NoOpReason::IndexOutOfBounds);
    }

    if source_col.id == dest_col.id {
        return reorder_within(board, source_col, source, destination);
    }

    if destination.index > dest_col.len() {
        return Applied::unchanged(board, NoOpReason::IndexOutOfBounds);
    }
    let moved = &source_col.items()[source.index];
    let move_out = policy == TransferPolicy::Move && !source_col.kind.is_read_only();

    let mut inserted = moved.clone();
    if !move_out {
        let Some(id) = ids.fresh() else {
            tracing::warn!(message = "reorder.ids_exhausted", prefix = ids.prefix());
            return Applied::unchanged(board, NoOpReason::IdsExhausted);
        };
        inserted.id = id;
        debug_assert!(
            !board.contains_item(&inserted.id),
            "generated id {} already on the board",
            inserted.id
        );
    }
    let outcome = if move_out {
        DropOutcome::Transferred {
            id: inserted.id.clone(),
        }
    } else {
        DropOutcome::Copied {
            new_id: inserted.id.clone(),
        }
    };

    let mut dest_items = dest_col.items().to_vec();
    dest_items.insert(destination.index, inserted);
    let mut next = board.with_column(dest_col.with_items(dest_items));
    if move_out {
        let mut source_items = source_col.items().to_vec();
        source_items.remove(source.index);
        next = next.with_column(source_col.with_items(source_items));
    }
    Applied {
        board: next,
        outcome,
    }
}

fn reorder_within(
    board: &Board,
    column: &Column,
    source: &Location,
    destination: &Location,
) -> Applied {
    if source.index == destination.index {
        return Applied::unchanged(board, NoOpReason::SamePosition);
    }
    // After removal the sequence is one shorter, so the last valid slot is len - 1.
    if destination.index >= column.len() {
        return Applied::unchanged(board, NoOpReason::IndexOutOfBounds);
    }
    let items = move_element(column.items(), source.index, destination.index);
    Applied {
        board: board.with_column(column.with_items(items)),
        outcome: DropOutcome::Reordered {
            from: source.index,
            to: destination.index,
        },
    }
}

fn apply_column_drag(board: &Board, result: &DragResult) -> Applied {
    let Some(destination) = &result.destination else {
        return Applied::unchanged(board, NoOpReason::NoDestination);
    };
    let (from, to) = (result.source.index, destination.index);
    let len = board.columns().len();
    if from >= len || to >= len {
        return Applied::unchanged(board, NoOpReason::IndexOutOfBounds);
    }
    if from == to {
        return Applied::unchanged(board, NoOpReason::SamePosition);
    }
    Applied {
        board: board.with_column_order(move_element(board.columns(), from, to)),
        outcome: DropOutcome::ColumnMoved { from, to },
    }
}
