//! Task use-case service.
//!
//! # Responsibility
//! - Provide CRUD and completion toggling over the task list.
//!
//! # Invariants
//! - `all_tasks` is ordered by due date ascending, undated tasks first, ties in
//!   insertion order.
//! - Update/delete/toggle of an unknown id never mutates the store.

use crate::clock::{Clock, SystemClock};
use crate::model::task::{TaskId, TaskItem, TaskPriority};
use log::debug;
use std::sync::Arc;

/// Task storage contract.
pub trait TaskService {
    /// Returns all tasks ordered by due date.
    fn all_tasks(&self) -> Vec<TaskItem>;
    /// Appends one task and returns the stored value.
    fn add_task(&mut self, task: TaskItem) -> TaskItem;
    /// Replaces the task with the same id. Unknown ids are ignored.
    fn update_task(&mut self, task: TaskItem) -> TaskItem;
    /// Removes one task. Unknown ids are ignored.
    fn delete_task(&mut self, id: TaskId);
    /// Flips completion; returns `None` when the id is unknown.
    fn toggle_complete(&mut self, id: TaskId) -> Option<TaskItem>;
    /// Replaces the whole task list, e.g. when restoring saved state.
    fn replace_all(&mut self, tasks: Vec<TaskItem>);
}

/// Local list-backed task store.
pub struct InMemoryTaskService {
    tasks: Vec<TaskItem>,
    clock: Arc<dyn Clock>,
}

impl InMemoryTaskService {
    /// Creates an empty store.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            tasks: Vec::new(),
            clock,
        }
    }

    /// Creates a store pre-filled with today's sample tasks.
    pub fn seeded(clock: Arc<dyn Clock>) -> Self {
        let mut service = Self::new(clock);
        service.tasks = sample_tasks(service.clock.as_ref());
        service
    }

    /// Number of stored tasks, completed ones included.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// `true` when no task is stored.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

impl Default for InMemoryTaskService {
    /// Empty store on the system clock.
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl TaskService for InMemoryTaskService {
    fn all_tasks(&self) -> Vec<TaskItem> {
        let mut tasks = self.tasks.clone();
        tasks.sort_by_key(|task| task.due_date);
        tasks
    }

    fn add_task(&mut self, task: TaskItem) -> TaskItem {
        debug!("event=task_add module=tasks status=ok task_id={}", task.id);
        self.tasks.push(task.clone());
        task
    }

    fn update_task(&mut self, task: TaskItem) -> TaskItem {
        match self.position(task.id) {
            Some(index) => {
                debug!("event=task_update module=tasks status=ok task_id={}", task.id);
                self.tasks[index] = task.clone();
            }
            None => {
                debug!(
                    "event=task_update module=tasks status=skipped reason=not_found task_id={}",
                    task.id
                );
            }
        }
        task
    }

    fn delete_task(&mut self, id: TaskId) {
        if let Some(index) = self.position(id) {
            self.tasks.remove(index);
            debug!("event=task_delete module=tasks status=ok task_id={id}");
        }
    }

    fn toggle_complete(&mut self, id: TaskId) -> Option<TaskItem> {
        let now = self.clock.now();
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.toggle_complete(now);
        debug!(
            "event=task_toggle module=tasks status=ok task_id={id} completed={}",
            task.is_completed
        );
        Some(task.clone())
    }

    fn replace_all(&mut self, tasks: Vec<TaskItem>) {
        self.tasks = tasks;
    }
}

fn sample_tasks(clock: &dyn Clock) -> Vec<TaskItem> {
    let now = clock.now();
    let today = clock.today();
    vec![
        TaskItem::new("Review pull request #234", now)
            .with_priority(TaskPriority::High)
            .with_due_date(today)
            .with_tags(["development", "urgent"]),
        TaskItem::new("Update project documentation", now)
            .with_priority(TaskPriority::Medium)
            .with_due_date(today)
            .with_tags(["documentation"]),
        TaskItem::new("Fix authentication bug", now)
            .with_description("Users reporting login issues on mobile")
            .with_priority(TaskPriority::Urgent)
            .with_due_date(today)
            .with_tags(["bug", "urgent"]),
    ]
}
