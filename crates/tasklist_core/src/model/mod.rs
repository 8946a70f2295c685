//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record and its persisted JSON shape.
//! - Keep enum/string conversions for persistence in one place.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` assigned at creation.
//! - The serialized shape round-trips field-for-field, order preserved.

pub mod task;
