use chrono::NaiveDate;
use tasklist_core::{
    ControllerError, JsonTaskStore, Priority, SortKey, Task, TaskController, TaskForm, TaskStorage,
};
use tempfile::TempDir;
use uuid::Uuid;

fn new_controller(dir: &TempDir) -> TaskController<JsonTaskStore> {
    TaskController::new(JsonTaskStore::open(dir.path().join("tasks.json")))
}

fn form(title: &str) -> TaskForm {
    TaskForm {
        title: title.to_string(),
        ..TaskForm::default()
    }
}

#[test]
fn create_task_assigns_fresh_id_and_persists() {
    let dir = TempDir::new().unwrap();
    let mut controller = new_controller(&dir);

    let id = controller
        .create_task(TaskForm {
            title: "buy milk".to_string(),
            priority: Priority::High,
            category: "errands".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            is_done: false,
        })
        .unwrap();

    assert_eq!(controller.tasks().len(), 1);
    let task = &controller.tasks()[0];
    assert_eq!(task.id, id);
    assert_eq!(task.title, "buy milk");
    assert_eq!(task.priority, Priority::High);

    let reloaded = JsonTaskStore::open(dir.path().join("tasks.json"));
    assert_eq!(reloaded.tasks()[0].id, id);
}

#[test]
fn create_task_with_blank_title_mutates_nothing() {
    let dir = TempDir::new().unwrap();
    let mut controller = new_controller(&dir);

    let err = controller.create_task(form("   ")).unwrap_err();
    assert!(matches!(err, ControllerError::EmptyTitle));
    assert!(controller.tasks().is_empty());
    // Aborted before the store: no snapshot was written either.
    assert!(!dir.path().join("tasks.json").exists());
}

#[test]
fn edit_task_keeps_the_id_and_replaces_fields() {
    let dir = TempDir::new().unwrap();
    let mut controller = new_controller(&dir);

    let id = controller.create_task(form("draft")).unwrap();
    controller
        .edit_task(
            id,
            TaskForm {
                title: "final".to_string(),
                priority: Priority::Critical,
                category: "work".to_string(),
                due_date: None,
                is_done: true,
            },
        )
        .unwrap();

    assert_eq!(controller.tasks().len(), 1);
    let task = &controller.tasks()[0];
    assert_eq!(task.id, id);
    assert_eq!(task.title, "final");
    assert!(task.is_done);
}

#[test]
fn edit_task_rejects_blank_title_without_mutation() {
    let dir = TempDir::new().unwrap();
    let mut controller = new_controller(&dir);

    let id = controller.create_task(form("keep me")).unwrap();
    let err = controller.edit_task(id, form("")).unwrap_err();
    assert!(matches!(err, ControllerError::EmptyTitle));
    assert_eq!(controller.tasks()[0].title, "keep me");
}

#[test]
fn delete_task_declined_leaves_collection_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut controller = new_controller(&dir);

    let id = controller.create_task(form("precious")).unwrap();
    let removed = controller.delete_task(id, || false).unwrap();

    assert!(!removed);
    assert_eq!(controller.tasks().len(), 1);
}

#[test]
fn delete_task_confirmed_removes_exactly_the_target() {
    let dir = TempDir::new().unwrap();
    let mut controller = new_controller(&dir);

    let keep = controller.create_task(form("keep")).unwrap();
    let doomed = controller.create_task(form("doomed")).unwrap();

    let removed = controller.delete_task(doomed, || true).unwrap();
    assert!(removed);
    assert_eq!(controller.tasks().len(), 1);
    assert_eq!(controller.tasks()[0].id, keep);
}

#[test]
fn toggle_done_flips_the_flag_both_ways() {
    let dir = TempDir::new().unwrap();
    let mut controller = new_controller(&dir);

    let id = controller.create_task(form("flip me")).unwrap();
    assert!(controller.toggle_done(id).unwrap());
    assert!(controller.tasks()[0].is_done);
    assert!(controller.toggle_done(id).unwrap());
    assert!(!controller.tasks()[0].is_done);
}

#[test]
fn toggle_done_with_unknown_id_is_a_silent_noop() {
    let dir = TempDir::new().unwrap();
    let mut controller = new_controller(&dir);

    controller.create_task(form("stay put")).unwrap();
    let toggled = controller.toggle_done(Uuid::new_v4()).unwrap();

    assert!(!toggled);
    assert!(!controller.tasks()[0].is_done);
}

#[test]
fn sort_by_due_date_puts_undated_tasks_last() {
    let dir = TempDir::new().unwrap();
    let mut controller = new_controller(&dir);

    let mut later = form("later");
    later.due_date = NaiveDate::from_ymd_opt(2024, 1, 5);
    let undated = form("undated");
    let mut earlier = form("earlier");
    earlier.due_date = NaiveDate::from_ymd_opt(2023, 12, 1);

    controller.create_task(later).unwrap();
    controller.create_task(undated).unwrap();
    controller.create_task(earlier).unwrap();
    controller.sort_tasks(SortKey::DueDate).unwrap();

    let titles: Vec<_> = controller
        .tasks()
        .iter()
        .map(|task| task.title.as_str())
        .collect();
    assert_eq!(titles, ["earlier", "later", "undated"]);
}

#[test]
fn sort_by_priority_follows_enum_ordinal() {
    let dir = TempDir::new().unwrap();
    let mut controller = new_controller(&dir);

    for (title, priority) in [
        ("h", Priority::High),
        ("l", Priority::Low),
        ("c", Priority::Critical),
        ("m", Priority::Medium),
    ] {
        let mut form = form(title);
        form.priority = priority;
        controller.create_task(form).unwrap();
    }
    controller.sort_tasks(SortKey::Priority).unwrap();

    let order: Vec<_> = controller
        .tasks()
        .iter()
        .map(|task| task.priority)
        .collect();
    assert_eq!(
        order,
        [
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Critical
        ]
    );
}

#[test]
fn sort_by_title_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let mut controller = new_controller(&dir);

    for title in ["banana", "Apple", "cherry"] {
        controller.create_task(form(title)).unwrap();
    }
    controller.sort_tasks(SortKey::Title).unwrap();

    let titles: Vec<_> = controller
        .tasks()
        .iter()
        .map(|task| task.title.as_str())
        .collect();
    assert_eq!(titles, ["Apple", "banana", "cherry"]);
}

#[test]
fn sort_by_category_treats_empty_as_empty_string() {
    let dir = TempDir::new().unwrap();
    let mut controller = new_controller(&dir);

    for (title, category) in [("w", "Work"), ("n", ""), ("h", "home")] {
        let mut form = form(title);
        form.category = category.to_string();
        controller.create_task(form).unwrap();
    }
    controller.sort_tasks(SortKey::Category).unwrap();

    let categories: Vec<_> = controller
        .tasks()
        .iter()
        .map(|task| task.category.as_str())
        .collect();
    assert_eq!(categories, ["", "home", "Work"]);
}

#[test]
fn sort_by_done_puts_open_tasks_first() {
    let dir = TempDir::new().unwrap();
    let mut controller = new_controller(&dir);

    let done = controller.create_task(form("finished")).unwrap();
    controller.create_task(form("open")).unwrap();
    controller.toggle_done(done).unwrap();

    controller.sort_tasks(SortKey::Done).unwrap();
    assert!(!controller.tasks()[0].is_done);
    assert!(controller.tasks()[1].is_done);
}

#[test]
fn sorted_order_survives_a_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");
    let mut controller = TaskController::new(JsonTaskStore::open(&path));

    controller.create_task(form("zebra")).unwrap();
    controller.create_task(form("aardvark")).unwrap();
    controller.sort_tasks(SortKey::Title).unwrap();

    let reloaded = JsonTaskStore::open(&path);
    let titles: Vec<_> = reloaded
        .tasks()
        .iter()
        .map(|task| task.title.as_str())
        .collect();
    assert_eq!(titles, ["aardvark", "zebra"]);
}

#[test]
fn controller_works_over_any_storage_impl() {
    // In-memory storage double, mirroring how the UI-free controller only
    // depends on the TaskStorage contract.
    #[derive(Default)]
    struct MemoryStore {
        tasks: Vec<Task>,
    }

    impl TaskStorage for MemoryStore {
        fn tasks(&self) -> &[Task] {
            &self.tasks
        }
        fn add(&mut self, task: Task) -> tasklist_core::StoreResult<()> {
            self.tasks.push(task);
            Ok(())
        }
        fn remove(&mut self, id: tasklist_core::TaskId) -> tasklist_core::StoreResult<()> {
            self.tasks.retain(|task| task.id != id);
            Ok(())
        }
        fn update(&mut self, task: Task) -> tasklist_core::StoreResult<()> {
            if let Some(slot) = self.tasks.iter_mut().find(|entry| entry.id == task.id) {
                *slot = task;
            }
            Ok(())
        }
        fn sort_by(&mut self, key: SortKey) -> tasklist_core::StoreResult<()> {
            self.tasks.sort_by(|a, b| key.compare(a, b));
            Ok(())
        }
    }

    let mut controller = TaskController::new(MemoryStore::default());
    let id = controller.create_task(form("portable")).unwrap();
    controller.toggle_done(id).unwrap();
    assert!(controller.tasks()[0].is_done);
}
