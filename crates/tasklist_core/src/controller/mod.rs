//! UI-facing use-case layer.
//!
//! # Responsibility
//! - Sequence validated user intents into store operations.
//! - Keep the presentation layer decoupled from persistence details.
//!
//! # Invariants
//! - Validation failures abort before any store mutation.
//! - The controller never reassigns a task id.

pub mod task_controller;
