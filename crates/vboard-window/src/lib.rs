#![forbid(unsafe_code)]

//! Windowed rendering contract for vboard columns.
//!
//! # Role in vboard
//! `vboard-window` turns a committed [`vboard_core::Board`] plus the live
//! [`vboard_core::DragSession`] into the rows a windowed renderer should
//! draw. It never mutates the board.
//!
//! # Primary responsibilities
//! - **Range math**: [`visible_range`] over fixed-height rows, with clamping
//!   and overscan.
//! - **WindowController**: scroll state per slot, placeholder row insertion,
//!   scroll reset on identity change.
//! - **BoardView**: one controller per column slot, resynced after commits.
//! - **Geometry**: drag-vs-window geometry selection for painting.

pub mod board_view;
pub mod controller;
pub mod geometry;
pub mod range;

pub use board_view::{BoardView, Slot};
pub use controller::{RecordingScrollTarget, Row, RowSlot, ScrollTarget, SlotKey, WindowController};
pub use geometry::{RowGeometry, merge};
pub use range::{clamp_offset, effective_len, max_scroll_offset, visible_range, with_overscan};
