//! Task list workflows.
//!
//! Thin orchestration over the persistence gateway: manual task creation
//! with the same defaults the task form applies, completion toggling, and
//! a project-grouped view of the open list.

use crate::gateway::PersistenceGateway;
use std::collections::BTreeMap;
use std::sync::Arc;
use syd_core::{localized, Language, Priority, Task, TaskDraft};

/// Drives the tasks screen.
pub struct TasksService {
    persistence: Arc<PersistenceGateway>,
}

impl TasksService {
    pub fn new(persistence: Arc<PersistenceGateway>) -> Self {
        Self { persistence }
    }

    /// All tasks, newest first.
    pub async fn tasks(&self) -> Vec<Task> {
        self.persistence.get_tasks().await
    }

    /// Creates a task from the form fields. Blank content is ignored; a
    /// blank project falls back to the localized "no project" bucket.
    pub async fn add_task(
        &self,
        content: &str,
        project: &str,
        priority: Priority,
        due_date: Option<String>,
        language: Language,
    ) -> Option<Task> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        let project = project.trim();
        let draft = TaskDraft {
            content: content.to_string(),
            completed: false,
            created_at: chrono::Utc::now().to_rfc3339(),
            priority,
            due_date: due_date.filter(|d| !d.trim().is_empty()),
            project: if project.is_empty() {
                localized(language, "Nessun Progetto", "No Project")
            } else {
                project.to_string()
            },
        };
        self.persistence.add_task(draft).await
    }

    /// Flips a task's completion state. Unknown ids are a no-op.
    pub async fn toggle_task(&self, task_id: &str) {
        if let Some(mut task) = self.persistence.get_task(task_id).await {
            task.completed = !task.completed;
            self.persistence.update_task(task_id, &task).await;
        }
    }

    pub async fn delete_task(&self, task_id: &str) {
        self.persistence.delete_task(task_id).await;
    }

    /// Open tasks grouped by project, alphabetically by project label.
    pub async fn open_tasks_by_project(&self) -> BTreeMap<String, Vec<Task>> {
        let mut grouped: BTreeMap<String, Vec<Task>> = BTreeMap::new();
        for task in self.persistence.get_tasks().await {
            if !task.completed {
                grouped.entry(task.project.clone()).or_default().push(task);
            }
        }
        grouped
    }
}
