//! Task (to-do item) domain model.

use serde::{Deserialize, Serialize};

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// A to-do item.
///
/// Created by explicit user action, by selection-to-task conversion in the
/// agenda, or by an AI `add_task` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque id assigned by the store on creation.
    pub id: String,
    pub content: String,
    pub completed: bool,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    pub priority: Priority,
    /// Optional due date in `YYYY-MM-DD` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Free-text project label.
    pub project: String,
}

/// The id-less document used to create a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub content: String,
    pub completed: bool,
    pub created_at: String,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub project: String,
}

impl Task {
    /// Materializes a stored task from a draft and its assigned id.
    pub fn from_draft(id: impl Into<String>, draft: TaskDraft) -> Self {
        Self {
            id: id.into(),
            content: draft.content,
            completed: draft.completed,
            created_at: draft.created_at,
            priority: draft.priority,
            due_date: draft.due_date,
            project: draft.project,
        }
    }
}
