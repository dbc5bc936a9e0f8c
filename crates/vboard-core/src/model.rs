#![forbid(unsafe_code)]

//! Ordered collection model: items, columns, and the board that holds them.
//!
//! The model is plain data. Every mutation goes through the reorder engine
//! ([`crate::reorder`]), which builds a new [`Board`] value instead of
//! splicing an existing one.
//!
//! # Invariants
//!
//! 1. Item ids are unique across the whole board; an item lives in exactly
//!    one column.
//! 2. A column's item order is its rendered order.
//! 3. Palette columns are never mutated by drags.
//! 4. Item sequences are shared (`Arc<[Item]>`) and replaced wholesale, so a
//!    reader holding an old [`Board`] never observes a half-applied change.

use std::fmt;
use std::sync::Arc;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identity of an item. Never regenerated for an existing item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Identity of a column (also the droppable container id for item drags).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single entry in a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
}

impl Item {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(id),
            text: text.into(),
        }
    }
}

/// Whether a column accepts drops and internal reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Fixed source catalog. Items are copied out, nothing is dropped in.
    Palette,
    /// Freely reorderable column that receives transfers.
    #[default]
    Canvas,
}

impl ColumnKind {
    #[inline]
    #[must_use]
    pub fn is_read_only(self) -> bool {
        matches!(self, Self::Palette)
    }
}

/// An ordered, named container of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub kind: ColumnKind,
    items: Arc<[Item]>,
}

impl Column {
    /// Create a column from an item sequence.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: ColumnKind,
        items: impl Into<Arc<[Item]>>,
    ) -> Self {
        Self {
            id: ColumnId::new(id),
            title: title.into(),
            kind,
            items: items.into(),
        }
    }

    /// Items in rendered order.
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    #[must_use]
    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Whether two columns share the same underlying item sequence.
    #[must_use]
    pub fn shares_items_with(&self, other: &Column) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    /// Same column identity with a replaced item sequence.
    #[must_use]
    pub(crate) fn with_items(&self, items: Vec<Item>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            kind: self.kind,
            items: items.into(),
        }
    }
}

/// Errors raised while assembling a board from initial data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("duplicate column id `{0}`")]
    DuplicateColumn(ColumnId),
    #[error("duplicate item id `{item}` (second occurrence in column `{column}`)")]
    DuplicateItem { item: ItemId, column: ColumnId },
}

/// The ordered set of columns on screen. Column order is the `columns` order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Build a board, rejecting duplicate column or item ids.
    pub fn new(columns: Vec<Column>) -> Result<Self, ModelError> {
        let mut column_ids = AHashSet::with_capacity(columns.len());
        let mut item_ids = AHashSet::new();
        for column in &columns {
            if !column_ids.insert(column.id.clone()) {
                return Err(ModelError::DuplicateColumn(column.id.clone()));
            }
            for item in column.items() {
                if !item_ids.insert(item.id.clone()) {
                    return Err(ModelError::DuplicateItem {
                        item: item.id.clone(),
                        column: column.id.clone(),
                    });
                }
            }
        }
        Ok(Self { columns })
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| &column.id == id)
    }

    /// Position of a column in the board order.
    #[must_use]
    pub fn column_position(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| &column.id == id)
    }

    #[must_use]
    pub fn column_at(&self, position: usize) -> Option<&Column> {
        self.columns.get(position)
    }

    /// Whether any column currently holds an item with this id.
    #[must_use]
    pub fn contains_item(&self, id: &ItemId) -> bool {
        self.columns
            .iter()
            .any(|column| column.items().iter().any(|item| &item.id == id))
    }

    /// Every item id on the board, in column then row order.
    pub fn item_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.columns
            .iter()
            .flat_map(|column| column.items().iter().map(|item| &item.id))
    }

    /// Same board with one column replaced by `column` (matched by id).
    #[must_use]
    pub(crate) fn with_column(&self, column: Column) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|existing| {
                if existing.id == column.id {
                    column.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
        Self { columns }
    }

    #[must_use]
    pub(crate) fn with_column_order(&self, columns: Vec<Column>) -> Self {
        Self { columns }
    }
}
