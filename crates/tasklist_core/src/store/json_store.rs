//! File-backed task store.
//!
//! # Responsibility
//! - Own the authoritative in-memory task collection.
//! - Keep a pretty-printed JSON snapshot equal to it after every mutation.
//!
//! # Invariants
//! - `save` is the sole write path and rewrites the whole file each time.
//! - A missing or unreadable snapshot yields an empty collection; malformed
//!   content is preserved under `<path>.corrupt` before state is reset.

use super::{SortKey, StoreResult, TaskStorage};
use crate::model::task::{Task, TaskId};
use log::{debug, info, warn};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON-file implementation of [`TaskStorage`].
pub struct JsonTaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl JsonTaskStore {
    /// Opens the store, loading the snapshot at `path` if one exists.
    ///
    /// Never fails: a missing file starts empty, and corrupt content is
    /// moved aside and replaced by an empty collection. Write errors on the
    /// first subsequent mutation will still surface normally.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tasks = load_snapshot(&path);
        info!(
            "event=store_open module=store status=ok path={} tasks={}",
            path.display(),
            tasks.len()
        );
        Self { path, tasks }
    }

    /// Path of the backing snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serializes the whole collection to the backing file.
    ///
    /// Every mutating operation ends here; there is no batching or deferred
    /// write. Failures propagate to the caller as fatal I/O errors.
    pub fn save(&self) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(&self.tasks)?;
        fs::write(&self.path, json)?;
        debug!(
            "event=store_save module=store status=ok tasks={}",
            self.tasks.len()
        );
        Ok(())
    }
}

impl TaskStorage for JsonTaskStore {
    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn add(&mut self, task: Task) -> StoreResult<()> {
        debug!("event=task_add module=store id={}", task.id);
        self.tasks.push(task);
        self.save()
    }

    fn remove(&mut self, id: TaskId) -> StoreResult<()> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        debug!(
            "event=task_remove module=store id={} removed={}",
            id,
            before - self.tasks.len()
        );
        self.save()
    }

    fn update(&mut self, task: Task) -> StoreResult<()> {
        if let Some(slot) = self.tasks.iter_mut().find(|entry| entry.id == task.id) {
            debug!("event=task_update module=store id={} matched=1", task.id);
            *slot = task;
        } else {
            debug!("event=task_update module=store id={} matched=0", task.id);
        }
        self.save()
    }

    fn sort_by(&mut self, key: SortKey) -> StoreResult<()> {
        debug!("event=task_sort module=store key={key:?}");
        self.tasks.sort_by(|a, b| key.compare(a, b));
        self.save()
    }
}

fn load_snapshot(path: &Path) -> Vec<Task> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(err) => {
            warn!(
                "event=store_recovered module=store status=empty reason=read_error path={} error={}",
                path.display(),
                err
            );
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Task>>(&text) {
        Ok(tasks) => tasks,
        Err(err) => {
            let backup = preserve_corrupt_snapshot(path);
            warn!(
                "event=store_recovered module=store status=empty reason=parse_error path={} backup={} error={}",
                path.display(),
                backup
                    .as_deref()
                    .map_or_else(|| "none".to_string(), |p| p.display().to_string()),
                err
            );
            Vec::new()
        }
    }
}

/// Moves an unparseable snapshot to `<path>.corrupt` so the data survives
/// the reset. Best effort: a failed rename still resets to empty.
fn preserve_corrupt_snapshot(path: &Path) -> Option<PathBuf> {
    let mut backup = OsString::from(path.as_os_str());
    backup.push(".corrupt");
    let backup = PathBuf::from(backup);
    match fs::rename(path, &backup) {
        Ok(()) => Some(backup),
        Err(err) => {
            warn!(
                "event=store_backup module=store status=error path={} error={}",
                path.display(),
                err
            );
            None
        }
    }
}
