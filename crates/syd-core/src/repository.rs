//! Repository traits for notes and tasks.
//!
//! These traits decouple the application from the storage mechanism
//! (JSON documents on disk here; a remote document store in the original
//! deployment). All operations are async and fallible; the error-absorbing
//! policy lives one layer up, in the persistence gateway.

use crate::error::Result;
use crate::note::{Note, NoteDraft};
use crate::task::{Task, TaskDraft};
use async_trait::async_trait;

/// An abstract store of agenda notes.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Lists all notes, newest date first.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Finds a note by id. `Ok(None)` when absent.
    async fn find_by_id(&self, note_id: &str) -> Result<Option<Note>>;

    /// Creates a note from a draft and returns it with its assigned id.
    async fn add(&self, draft: NoteDraft) -> Result<Note>;

    /// Replaces the document for `note_id` with the draft.
    async fn update(&self, note_id: &str, draft: NoteDraft) -> Result<()>;

    /// Deletes a note. Deleting an absent note is not an error.
    async fn delete(&self, note_id: &str) -> Result<()>;
}

/// An abstract store of to-do tasks.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Lists all tasks, newest creation first.
    async fn list(&self) -> Result<Vec<Task>>;

    /// Finds a task by id. `Ok(None)` when absent.
    async fn find_by_id(&self, task_id: &str) -> Result<Option<Task>>;

    /// Creates a task from a draft and returns it with its assigned id.
    async fn add(&self, draft: TaskDraft) -> Result<Task>;

    /// Replaces the document for `task_id` with the given task state.
    async fn update(&self, task_id: &str, task: &Task) -> Result<()>;

    /// Deletes a task. Deleting an absent task is not an error.
    async fn delete(&self, task_id: &str) -> Result<()>;
}
