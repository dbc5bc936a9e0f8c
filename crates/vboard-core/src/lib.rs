#![forbid(unsafe_code)]

//! Core: ordered column model, drag sessions, and the reorder engine.
//!
//! # Role in vboard
//! `vboard-core` owns the logical state of a board of columns. The gesture
//! collaborator feeds it resolved drag events; the window layer
//! (`vboard-window`) reads committed boards and the live drag session to
//! decide which rows to render.
//!
//! # Primary responsibilities
//! - **Model**: [`Item`], [`Column`], [`Board`] with copy-on-write item
//!   sequences.
//! - **DragSession**: `Idle → Dragging → Idle` state machine and placeholder
//!   bookkeeping.
//! - **Reorder engine**: [`apply_drag_result`], a pure
//!   `(board, result) → board'` function.
//! - **Workspace**: commits engine output atomically and owns the
//!   [`IdGenerator`].

pub mod config;
pub mod drag;
pub mod fixtures;
pub mod ids;
pub mod model;
pub mod reorder;
pub mod workspace;

pub use config::{BoardConfig, ConfigError, WindowSettings};
pub use drag::{
    ActiveDrag, BOARD_CONTAINER, DragKind, DragPhase, DragResult, DragSession, GestureEvent,
    Location, board_container,
};
pub use fixtures::{GeneratedColumns, InitialData, PaletteAndCanvas};
pub use ids::IdGenerator;
pub use model::{Board, Column, ColumnId, ColumnKind, Item, ItemId, ModelError};
pub use reorder::{Applied, DropOutcome, NoOpReason, TransferPolicy, apply_drag_result};
pub use workspace::Workspace;
