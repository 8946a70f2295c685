//! Task use-case controller.
//!
//! # Responsibility
//! - Translate add/edit/delete/toggle/sort intents into store calls.
//! - Apply the title validation rule ahead of every write.
//!
//! # Invariants
//! - A blank title never reaches the store; the operation aborts with a
//!   validation error and nothing is persisted.
//! - Delete proceeds only when the confirmation collaborator agrees.

use crate::model::task::{Priority, Task, TaskId};
use crate::store::{SortKey, StoreError, TaskStorage};
use chrono::NaiveDate;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Field values collected by the edit/create dialog collaborator.
///
/// The dialog returns one of these on confirm; cancellation never reaches
/// the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub priority: Priority,
    pub category: String,
    pub due_date: Option<NaiveDate>,
    pub is_done: bool,
}

impl TaskForm {
    fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            priority: self.priority,
            category: self.category,
            due_date: self.due_date,
            is_done: self.is_done,
        }
    }
}

/// Controller error taxonomy.
///
/// `EmptyTitle` is recoverable (the UI re-prompts); `Store` wraps fatal
/// persistence failures and propagates unchanged.
#[derive(Debug)]
pub enum ControllerError {
    EmptyTitle,
    Store(StoreError),
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyTitle => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ControllerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Use-case controller over a [`TaskStorage`] implementation.
pub struct TaskController<S: TaskStorage> {
    store: S,
}

impl<S: TaskStorage> TaskController<S> {
    /// Creates a controller owning the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current collection in display order.
    ///
    /// The presentation layer re-pulls this after every mutation instead of
    /// holding a live reference across calls.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Creates a task from confirmed form values.
    ///
    /// # Contract
    /// - Rejects blank (empty or whitespace-only) titles before mutating.
    /// - Assigns a fresh id and returns it.
    pub fn create_task(&mut self, form: TaskForm) -> ControllerResult<TaskId> {
        validate_title(&form.title)?;
        let id = Uuid::new_v4();
        debug!("event=task_create module=controller id={id}");
        self.store.add(form.into_task(id))?;
        Ok(id)
    }

    /// Applies confirmed form values onto the task carrying `id`.
    ///
    /// # Contract
    /// - Same title validation as create.
    /// - The id is never changed; an absent id is a store-level no-op that
    ///   still persists.
    pub fn edit_task(&mut self, id: TaskId, form: TaskForm) -> ControllerResult<()> {
        validate_title(&form.title)?;
        debug!("event=task_edit module=controller id={id}");
        self.store.update(form.into_task(id))?;
        Ok(())
    }

    /// Removes the task with `id` after asking the confirmation collaborator.
    ///
    /// Returns whether a removal was issued; a declined confirmation leaves
    /// the collection and the snapshot untouched.
    pub fn delete_task(
        &mut self,
        id: TaskId,
        confirm: impl FnOnce() -> bool,
    ) -> ControllerResult<bool> {
        if !confirm() {
            debug!("event=task_delete module=controller id={id} confirmed=false");
            return Ok(false);
        }
        debug!("event=task_delete module=controller id={id} confirmed=true");
        self.store.remove(id)?;
        Ok(true)
    }

    /// Flips the completion flag on the task with `id`.
    ///
    /// Returns `Ok(false)` without touching the store when no task carries
    /// that id (nothing selected).
    pub fn toggle_done(&mut self, id: TaskId) -> ControllerResult<bool> {
        let Some(mut task) = self
            .store
            .tasks()
            .iter()
            .find(|task| task.id == id)
            .cloned()
        else {
            return Ok(false);
        };
        task.is_done = !task.is_done;
        debug!(
            "event=task_toggle module=controller id={id} is_done={}",
            task.is_done
        );
        self.store.update(task)?;
        Ok(true)
    }

    /// Durably reorders the collection by `key`.
    pub fn sort_tasks(&mut self, key: SortKey) -> ControllerResult<()> {
        self.store.sort_by(key)?;
        Ok(())
    }
}

fn validate_title(title: &str) -> ControllerResult<()> {
    if title.trim().is_empty() {
        return Err(ControllerError::EmptyTitle);
    }
    Ok(())
}
