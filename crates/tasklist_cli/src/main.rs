//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tasklist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use tasklist_core::{JsonTaskStore, TaskController, TaskForm, TaskStorage};

fn main() {
    println!("tasklist_core version={}", tasklist_core::core_version());

    // Small open/add/reload probe against a throwaway snapshot, independent
    // from any real user data.
    let path = std::env::temp_dir().join(format!("tasklist-smoke-{}.json", std::process::id()));
    let mut controller = TaskController::new(JsonTaskStore::open(&path));
    match controller.create_task(TaskForm {
        title: "smoke probe".to_string(),
        ..TaskForm::default()
    }) {
        Ok(_) => {
            let reloaded = JsonTaskStore::open(&path);
            println!("tasklist_core roundtrip tasks={}", reloaded.tasks().len());
        }
        Err(err) => println!("tasklist_core roundtrip error={err}"),
    }
    let _ = std::fs::remove_file(&path);
}
