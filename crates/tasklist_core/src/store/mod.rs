//! Store layer abstraction and file-backed implementation.
//!
//! # Responsibility
//! - Define the storage contract the controller programs against.
//! - Keep snapshot file details inside the persistence boundary.
//!
//! # Invariants
//! - Every mutating operation ends with a full-snapshot rewrite; the file and
//!   the in-memory collection are equal after each successful mutation.
//! - Load failures degrade to an empty collection and never reach the caller;
//!   write failures always do.

use crate::model::task::{Task, TaskId};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod json_store;

pub use json_store::JsonTaskStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for snapshot writes.
///
/// There is deliberately no read-side variant: load failures reset the
/// collection instead of surfacing an error.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "snapshot write failed: {err}"),
            Self::Serialize(err) => write!(f, "snapshot serialization failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Column a durable sort is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive lexical title order.
    Title,
    /// Enum ordinal ascending: Low < Medium < High < Critical.
    Priority,
    /// Case-insensitive lexical category order; empty sorts as "".
    Category,
    /// Dated tasks first in ascending date order, undated tasks last.
    DueDate,
    /// Open tasks before completed ones.
    Done,
}

impl SortKey {
    /// Comparator for this key. Ties compare equal so that a stable sort
    /// preserves the prior relative order.
    pub fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortKey::Priority => a.priority.cmp(&b.priority),
            SortKey::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
            SortKey::DueDate => match (a.due_date, b.due_date) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortKey::Done => a.is_done.cmp(&b.is_done),
        }
    }
}

/// Storage contract for the task collection.
///
/// Mutators persist synchronously before returning; the in-memory order
/// exposed by [`tasks`](TaskStorage::tasks) is the display order.
pub trait TaskStorage {
    /// Current collection in authoritative order.
    fn tasks(&self) -> &[Task];

    /// Appends a task and persists. The caller guarantees a fresh id.
    fn add(&mut self, task: Task) -> StoreResult<()>;

    /// Removes every entry with this id (expected at most one), then
    /// persists even when nothing matched.
    fn remove(&mut self, id: TaskId) -> StoreResult<()>;

    /// Replaces the first entry whose id matches `task.id` wholesale, then
    /// persists regardless of whether a match was found.
    fn update(&mut self, task: Task) -> StoreResult<()>;

    /// Reorders the collection by `key` and persists the new order.
    fn sort_by(&mut self, key: SortKey) -> StoreResult<()>;
}
