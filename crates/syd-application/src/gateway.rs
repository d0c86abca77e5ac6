//! The persistence gateway: error-absorbing façade over the repositories.
//!
//! Repository failures never propagate into the orchestration layer. Every
//! operation catches the error at this boundary, logs a diagnostic, and
//! degrades to an empty list, `None`, or a silent no-op, so the UI renders
//! an empty state instead of crashing.

use std::sync::Arc;
use syd_core::{Note, NoteDraft, NoteRepository, Task, TaskDraft, TaskRepository};

/// Async CRUD façade over notes and tasks.
pub struct PersistenceGateway {
    notes: Arc<dyn NoteRepository>,
    tasks: Arc<dyn TaskRepository>,
}

impl PersistenceGateway {
    pub fn new(notes: Arc<dyn NoteRepository>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self { notes, tasks }
    }

    /// All notes, newest date first. Empty on storage failure.
    pub async fn get_notes(&self) -> Vec<Note> {
        match self.notes.list().await {
            Ok(notes) => notes,
            Err(err) => {
                tracing::warn!(%err, "failed to load notes, serving empty list");
                Vec::new()
            }
        }
    }

    /// A single note, `None` when absent or on storage failure.
    pub async fn get_note(&self, note_id: &str) -> Option<Note> {
        match self.notes.find_by_id(note_id).await {
            Ok(note) => note,
            Err(err) => {
                tracing::warn!(note_id, %err, "failed to load note");
                None
            }
        }
    }

    /// Creates a note. `None` on storage failure.
    pub async fn add_note(&self, draft: NoteDraft) -> Option<Note> {
        match self.notes.add(draft).await {
            Ok(note) => Some(note),
            Err(err) => {
                tracing::warn!(%err, "failed to add note");
                None
            }
        }
    }

    /// Updates a note. Failures are logged and swallowed.
    pub async fn update_note(&self, note_id: &str, draft: NoteDraft) {
        if let Err(err) = self.notes.update(note_id, draft).await {
            tracing::warn!(note_id, %err, "failed to update note");
        }
    }

    /// Deletes a note. Failures are logged and swallowed.
    pub async fn delete_note(&self, note_id: &str) {
        if let Err(err) = self.notes.delete(note_id).await {
            tracing::warn!(note_id, %err, "failed to delete note");
        }
    }

    /// All tasks, newest creation first. Empty on storage failure.
    pub async fn get_tasks(&self) -> Vec<Task> {
        match self.tasks.list().await {
            Ok(tasks) => tasks,
            Err(err) => {
                tracing::warn!(%err, "failed to load tasks, serving empty list");
                Vec::new()
            }
        }
    }

    /// A single task, `None` when absent or on storage failure.
    pub async fn get_task(&self, task_id: &str) -> Option<Task> {
        match self.tasks.find_by_id(task_id).await {
            Ok(task) => task,
            Err(err) => {
                tracing::warn!(task_id, %err, "failed to load task");
                None
            }
        }
    }

    /// Creates a task. `None` on storage failure.
    pub async fn add_task(&self, draft: TaskDraft) -> Option<Task> {
        match self.tasks.add(draft).await {
            Ok(task) => Some(task),
            Err(err) => {
                tracing::warn!(%err, "failed to add task");
                None
            }
        }
    }

    /// Updates a task. Failures are logged and swallowed.
    pub async fn update_task(&self, task_id: &str, task: &Task) {
        if let Err(err) = self.tasks.update(task_id, task).await {
            tracing::warn!(task_id, %err, "failed to update task");
        }
    }

    /// Deletes a task. Failures are logged and swallowed.
    pub async fn delete_task(&self, task_id: &str) {
        if let Err(err) = self.tasks.delete(task_id).await {
            tracing::warn!(task_id, %err, "failed to delete task");
        }
    }
}
