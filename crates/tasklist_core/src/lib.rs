//! Core domain logic for the task list manager.
//! This crate is the single source of truth for task data and its snapshot.

pub mod controller;
pub mod logging;
pub mod model;
pub mod store;

pub use controller::task_controller::{ControllerError, ControllerResult, TaskController, TaskForm};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Task, TaskId};
pub use store::{JsonTaskStore, SortKey, StoreError, StoreResult, TaskStorage};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
