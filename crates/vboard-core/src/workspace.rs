#![forbid(unsafe_code)]

//! Workspace: the owner of the committed board and the drag session.
//!
//! Gesture callbacks arrive in session order (`start`, zero or more
//! `update`s, one `end`). On `end` the reorder engine runs once,
//! synchronously, and its board is published before the call returns.
//!
//! The committed board lives behind an [`ArcSwap`]: readers take a
//! [`snapshot`](Workspace::snapshot) and keep rendering from it while a new
//! board is swapped in whole. Nothing ever splices a published sequence.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::BoardConfig;
use crate::drag::{DragKind, DragResult, DragSession, GestureEvent, Location};
use crate::fixtures::InitialData;
use crate::ids::IdGenerator;
use crate::model::{Board, ModelError};
use crate::reorder::{DropOutcome, NoOpReason, TransferPolicy, apply_drag_result};

/// Top-level interactive state.
pub struct Workspace {
    board: ArcSwap<Board>,
    ids: IdGenerator,
    session: DragSession,
    policy: TransferPolicy,
    commits: u64,
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("columns", &self.board.load().columns().len())
            .field("dragging", &self.session.is_dragging())
            .field("commits", &self.commits)
            .finish()
    }
}

impl Workspace {
    /// Build from an initial data provider and configuration.
    pub fn new(data: &impl InitialData, config: &BoardConfig) -> Result<Self, ModelError> {
        let board = data.board()?;
        Ok(Self::from_board(
            board,
            config.ids.generator(),
            config.transfer.policy,
        ))
    }

    /// Build from an existing board. The generator is advanced past any
    /// seeded id it could otherwise reproduce.
    #[must_use]
    pub fn from_board(board: Board, mut ids: IdGenerator, policy: TransferPolicy) -> Self {
        ids.reserve_existing(board.item_ids());
        tracing::debug!(
            message = "workspace.init",
            columns = board.columns().len(),
            next_id = ids.peek()
        );
        Self {
            board: ArcSwap::from_pointee(board),
            ids,
            session: DragSession::new(),
            policy,
            commits: 0,
        }
    }

    /// The committed board. Stays valid (and unchanged) across later commits.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Board> {
        self.board.load_full()
    }

    #[must_use]
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    #[must_use]
    pub fn ids(&self) -> &IdGenerator {
        &self.ids
    }

    /// Mutable access to the generator (tests reseed it).
    pub fn ids_mut(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    #[must_use]
    pub fn policy(&self) -> TransferPolicy {
        self.policy
    }

    /// Number of boards published since construction.
    #[must_use]
    pub fn commits(&self) -> u64 {
        self.commits
    }

    pub fn on_drag_start(&mut self, kind: DragKind, source: Location) {
        self.session.start(kind, source);
    }

    pub fn on_drag_update(&mut self, destination: Option<Location>) {
        self.session.update(destination);
    }

    /// Finish the active drag and commit its result.
    ///
    /// Returns `None` if no drag was active.
    pub fn on_drag_end(&mut self, destination: Option<Location>) -> Option<DropOutcome> {
        let result = self.session.end(destination)?;
        Some(self.apply(&result))
    }

    /// Abort the active drag; the board is left as is.
    pub fn cancel(&mut self) -> Option<DropOutcome> {
        self.session
            .cancel()
            .map(|_| DropOutcome::Unchanged(NoOpReason::NoDestination))
    }

    /// Apply a finished drag result and publish the next board if it changed.
    pub fn apply(&mut self, result: &DragResult) -> DropOutcome {
        let current = self.board.load_full();
        let applied = apply_drag_result(&current, result, &mut self.ids, self.policy);
        if applied.outcome.changed() {
            self.board.store(Arc::new(applied.board));
            self.commits = self.commits.saturating_add(1);
            tracing::debug!(message = "workspace.commit", commits = self.commits);
        }
        applied.outcome
    }

    /// Dispatch one gesture event. Returns the drop outcome for `end`/`cancel`.
    pub fn handle(&mut self, event: &GestureEvent) -> Option<DropOutcome> {
        match event {
            GestureEvent::DragStart { kind, source } => {
                self.on_drag_start(*kind, source.clone());
                None
            }
            GestureEvent::DragUpdate { destination } => {
                self.on_drag_update(destination.clone());
                None
            }
            GestureEvent::DragEnd { destination } => self.on_drag_end(destination.clone()),
            GestureEvent::Cancel => self.cancel(),
        }
    }
}
