//! JSON-directory-backed TaskRepository implementation.

use crate::json_store::JsonDirStore;
use crate::paths::SydPaths;
use async_trait::async_trait;
use std::path::Path;
use syd_core::error::Result;
use syd_core::repository::TaskRepository;
use syd_core::task::{Task, TaskDraft};
use uuid::Uuid;

/// Task repository over a directory of JSON documents.
pub struct JsonTaskRepository {
    store: JsonDirStore,
}

impl JsonTaskRepository {
    /// Creates a repository at the given base directory, or the platform
    /// default when `None`.
    pub fn new(base_dir: Option<&Path>) -> Self {
        let paths = SydPaths::new(base_dir);
        Self {
            store: JsonDirStore::new(paths.tasks_dir()),
        }
    }
}

#[async_trait]
impl TaskRepository for JsonTaskRepository {
    async fn list(&self) -> Result<Vec<Task>> {
        let mut tasks: Vec<Task> = self.store.load_all().await?;
        // Newest creation first, matching the upstream store's query ordering.
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn find_by_id(&self, task_id: &str) -> Result<Option<Task>> {
        self.store.load(task_id).await
    }

    async fn add(&self, draft: TaskDraft) -> Result<Task> {
        let task = Task::from_draft(Uuid::new_v4().to_string(), draft);
        self.store.save(&task.id, &task).await?;
        Ok(task)
    }

    async fn update(&self, task_id: &str, task: &Task) -> Result<()> {
        self.store.save(task_id, task).await
    }

    async fn delete(&self, task_id: &str) -> Result<()> {
        self.store.delete(task_id).await
    }
}
