#![forbid(unsafe_code)]

//! Fresh item id generation.
//!
//! [`IdGenerator`] is an owned counter: the workspace holds one and threads
//! it into the reorder engine. Ids have the form `{prefix}{n}` with `n`
//! strictly increasing, so two calls never return the same id.

use crate::model::ItemId;

/// Default prefix for generated item ids.
pub const DEFAULT_ID_PREFIX: &str = "item-";

/// Monotonic id source for newly materialized items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    prefix: String,
    /// `None` once every suffix has been handed out or reserved.
    next: Option<u64>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX)
    }
}

impl IdGenerator {
    /// Create a generator starting at 0.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::seeded(prefix, 0)
    }

    /// Create a generator whose first id uses `next`.
    #[must_use]
    pub fn seeded(prefix: impl Into<String>, next: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: Some(next),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Counter value the next id will use, `None` when exhausted.
    #[must_use]
    pub fn peek(&self) -> Option<u64> {
        self.next
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }

    /// Produce a new id and advance the counter.
    ///
    /// Returns `None` once the counter is exhausted; an id is never repeated.
    pub fn fresh(&mut self) -> Option<ItemId> {
        let n = self.next?;
        self.next = n.checked_add(1);
        Some(ItemId::new(format!("{}{n}", self.prefix)))
    }

    /// Advance past any existing id that this generator could also produce.
    ///
    /// Seeded data may already contain ids like `item-4`; after this call the
    /// counter is strictly above every such suffix.
    pub fn reserve_existing<'a>(&mut self, ids: impl IntoIterator<Item = &'a ItemId>) {
        for id in ids {
            let Some(suffix) = id.as_str().strip_prefix(self.prefix.as_str()) else {
                continue;
            };
            if let (Ok(n), Some(next)) = (suffix.parse::<u64>(), self.next) {
                self.next = n.checked_add(1).map(|after| next.max(after));
            }
        }
    }

    /// Restart the counter (tests and fresh workspaces).
    pub fn reset(&mut self, next: u64) {
        self.next = Some(next);
    }
}
