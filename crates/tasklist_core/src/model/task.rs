//! Task domain model.
//!
//! # Responsibility
//! - Define the single persisted entity and its field defaults.
//! - Provide the bidirectional priority/string mapping used by the snapshot
//!   format and by combo-box population in the presentation layer.
//!
//! # Invariants
//! - `id` is unique across the collection and never changes after creation.
//! - `due_date` is an explicit `Option`, never a sentinel date.
//! - Unknown priority strings read from disk fall back to `Priority::Medium`
//!   instead of failing the whole load.

use chrono::NaiveDate;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Task urgency, ordered from least to most urgent.
///
/// The derived `Ord` follows declaration order, so sorting by priority uses
/// the enum ordinal directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    /// All variants in ordinal order, for combo-box population and tests.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    /// Returns the persisted string form of this priority.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    /// Parses the persisted string form back into a priority.
    ///
    /// Returns `None` for unknown values; callers decide the fallback.
    pub fn parse(value: &str) -> Option<Priority> {
        match value {
            "Low" => Some(Priority::Low),
            "Medium" => Some(Priority::Medium),
            "High" => Some(Priority::High),
            "Critical" => Some(Priority::Critical),
            _ => None,
        }
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    /// Deserializes from the persisted string form.
    ///
    /// Unknown names degrade to the default priority rather than rejecting
    /// the record; a snapshot written by a newer build stays loadable.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Priority::parse(&value).unwrap_or_default())
    }
}

/// A single to-do entry.
///
/// Value-like except for `id`, which anchors identity for update, remove and
/// toggle operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable identity, assigned once at creation.
    pub id: TaskId,
    /// Display text; the controller rejects blank titles before storage.
    pub title: String,
    /// Urgency level; persisted as the variant name string.
    pub priority: Priority,
    /// Free-text label; may be empty.
    #[serde(default)]
    pub category: String,
    /// Optional calendar date with no time component. `None` means no
    /// deadline and serializes as JSON `null`.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Completion flag.
    #[serde(default)]
    pub is_done: bool,
}

impl Task {
    /// Creates a task with a fresh id and default field values.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates a task with a caller-provided stable id.
    ///
    /// Used by edit paths and tests where identity already exists.
    pub fn with_id(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            priority: Priority::default(),
            category: String::new(),
            due_date: None,
            is_done: false,
        }
    }
}
