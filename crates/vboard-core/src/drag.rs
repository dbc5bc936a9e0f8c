#![forbid(unsafe_code)]

//! Drag session state machine.
//!
//! The gesture collaborator delivers already-resolved events (which
//! container and index the pointer is over); [`DragSession`] tracks the one
//! in-flight gesture and answers the questions the window layer asks while
//! it is in flight: which column reserves a placeholder slot, and which row
//! is the dragged original.
//!
//! # State Machine
//!
//! ```text
//! Idle --start(kind, source)--> Dragging { destination: Some(source) }
//! Dragging --update(dest?)-----> Dragging { destination: dest? }
//! Dragging --end(dest?)--------> Idle        (yields a DragResult)
//! Dragging --cancel()----------> Idle        (yields a DragResult with no destination)
//! ```
//!
//! # Invariants
//!
//! 1. At most one container reserves a placeholder, and only for item drags.
//! 2. No container reserves a placeholder while `Idle` or while the
//!    destination is `None`.
//! 3. `end` and `cancel` always return to `Idle`, whatever the destination.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | `update`/`end` while `Idle` | Ignored, logged at debug |
//! | `start` while `Dragging` | Stale session dropped as a cancel, new one starts |

use serde::{Deserialize, Serialize};

use crate::model::ColumnId;

/// Container id used for column drags (the board itself is the droppable).
pub const BOARD_CONTAINER: &str = "board";

/// The board container as a [`ColumnId`].
#[must_use]
pub fn board_container() -> ColumnId {
    ColumnId::new(BOARD_CONTAINER)
}

/// What is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    /// An item inside a column; containers are column ids.
    #[default]
    Item,
    /// A whole column; the container is [`BOARD_CONTAINER`].
    Column,
}

/// A container plus an index within it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub container: ColumnId,
    pub index: usize,
}

impl Location {
    #[must_use]
    pub fn new(container: impl Into<String>, index: usize) -> Self {
        Self {
            container: ColumnId::new(container),
            index,
        }
    }
}

/// Finalized outcome of a gesture, consumed by the reorder engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragResult {
    #[serde(default)]
    pub kind: DragKind,
    pub source: Location,
    /// `None` means the pointer was released outside any drop target.
    #[serde(default)]
    pub destination: Option<Location>,
}

impl DragResult {
    /// Item drag result.
    #[must_use]
    pub fn item(source: Location, destination: Option<Location>) -> Self {
        Self {
            kind: DragKind::Item,
            source,
            destination,
        }
    }

    /// Column drag result between board positions.
    #[must_use]
    pub fn column(from: usize, to: Option<usize>) -> Self {
        Self {
            kind: DragKind::Column,
            source: Location::new(BOARD_CONTAINER, from),
            destination: to.map(|index| Location::new(BOARD_CONTAINER, index)),
        }
    }
}

/// State of the gesture currently in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDrag {
    pub kind: DragKind,
    pub source: Location,
    pub destination: Option<Location>,
}

/// Drag session phase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

/// Events delivered by the gesture collaborator, in session order.
///
/// Serialized as tagged JSON so gesture traces can be recorded and replayed:
///
/// ```json
/// {"type":"drag_start","source":{"container":"canvas","index":0}}
/// {"type":"drag_update","destination":{"container":"canvas","index":2}}
/// {"type":"drag_end","destination":null}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureEvent {
    DragStart {
        #[serde(default)]
        kind: DragKind,
        source: Location,
    },
    DragUpdate {
        #[serde(default)]
        destination: Option<Location>,
    },
    DragEnd {
        #[serde(default)]
        destination: Option<Location>,
    },
    Cancel,
}

/// Tracks the single in-flight drag gesture.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    phase: DragPhase,
    started: u64,
}

impl DragSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    /// The in-flight drag, if any.
    #[must_use]
    pub fn active(&self) -> Option<&ActiveDrag> {
        match &self.phase {
            DragPhase::Dragging(active) => Some(active),
            DragPhase::Idle => None,
        }
    }

    /// Number of sessions started over the lifetime of this value.
    #[must_use]
    pub fn sessions_started(&self) -> u64 {
        self.started
    }

    /// Begin a drag. A session already in flight is dropped first.
    ///
    /// Returns the abandoned session's result (with no destination) when one
    /// was replaced.
    pub fn start(&mut self, kind: DragKind, source: Location) -> Option<DragResult> {
        let abandoned = self.cancel();
        if let Some(stale) = &abandoned {
            tracing::warn!(
                message = "drag.start.abandoned",
                container = %stale.source.container,
                index = stale.source.index
            );
        }
        tracing::debug!(
            message = "drag.start",
            kind = ?kind,
            container = %source.container,
            index = source.index
        );
        self.started = self.started.saturating_add(1);
        self.phase = DragPhase::Dragging(ActiveDrag {
            kind,
            destination: Some(source.clone()),
            source,
        });
        abandoned
    }

    /// Move the current destination. Returns false if no drag is active.
    pub fn update(&mut self, destination: Option<Location>) -> bool {
        let DragPhase::Dragging(active) = &mut self.phase else {
            tracing::debug!(message = "drag.update.ignored", reason = "idle");
            return false;
        };
        if active.destination != destination {
            tracing::trace!(
                message = "drag.update",
                container = destination.as_ref().map(|d| d.container.as_str()),
                index = destination.as_ref().map(|d| d.index)
            );
        }
        active.destination = destination;
        true
    }

    /// Finish the drag, returning to `Idle`.
    ///
    /// `destination` is the drop target reported by the gesture collaborator
    /// (`None` when released outside every droppable). Returns `None` only
    /// when no drag was active.
    pub fn end(&mut self, destination: Option<Location>) -> Option<DragResult> {
        let DragPhase::Dragging(active) = std::mem::take(&mut self.phase) else {
            tracing::debug!(message = "drag.end.ignored", reason = "idle");
            return None;
        };
        tracing::debug!(
            message = "drag.end",
            dropped = destination.is_some(),
            container = %active.source.container,
            index = active.source.index
        );
        Some(DragResult {
            kind: active.kind,
            source: active.source,
            destination,
        })
    }

    /// Abort the drag (focus loss, escape). Equivalent to `end(None)`.
    pub fn cancel(&mut self) -> Option<DragResult> {
        if !self.is_dragging() {
            return None;
        }
        self.end(None)
    }

    /// Index at which `container` must reserve a placeholder row, if any.
    ///
    /// Only the live destination of an item drag reserves space.
    #[must_use]
    pub fn placeholder_index(&self, container: &ColumnId) -> Option<usize> {
        let active = self.active()?;
        if active.kind != DragKind::Item {
            return None;
        }
        active
            .destination
            .as_ref()
            .filter(|destination| &destination.container == container)
            .map(|destination| destination.index)
    }

    /// Row index of the dragged original inside `container`, if it lives there.
    #[must_use]
    pub fn dragged_index(&self, container: &ColumnId) -> Option<usize> {
        let active = self.active()?;
        (active.kind == DragKind::Item && &active.source.container == container)
            .then_some(active.source.index)
    }

    /// Board position of the column being dragged, if a column drag is active.
    #[must_use]
    pub fn dragged_column(&self) -> Option<usize> {
        let active = self.active()?;
        (active.kind == DragKind::Column).then_some(active.source.index)
    }
}
