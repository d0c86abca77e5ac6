//! Commands emitted by the AI assistant.
//!
//! A [`Command`] is a structured instruction the conversational agent asks
//! the application to perform. Commands are transient: decoded from one
//! assistant response, applied in order by the executor, never persisted.
//!
//! The wire form is a loose `{action, payload}` bag; this sum type is the
//! validated internal form, keyed by action with only the fields that
//! action actually uses. Decoding (and dropping malformed entries) happens
//! at the AI gateway boundary.

use crate::task::Priority;
use serde::{Deserialize, Serialize};

/// A validated assistant command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "snake_case")]
pub enum Command {
    /// Navigate to a screen of the content graph.
    Navigate { screen_id: String },
    /// Open an external link in a sandboxed browsing context.
    OpenUrl { url: String },
    /// Create a task; missing fields get localized defaults.
    AddTask {
        content: Option<String>,
        project: Option<String>,
        priority: Option<Priority>,
        due_date: Option<String>,
    },
    /// Mark an existing task as completed.
    CompleteTask { task_id: String },
    /// Create a note; missing fields get localized defaults.
    AddNote {
        title: Option<String>,
        content: Option<String>,
        date: Option<String>,
    },
    /// Open an existing note pre-selected on the agenda screen.
    OpenNote { note_id: String },
}

impl Command {
    /// The wire action tag for this command, for logging.
    pub fn action_name(&self) -> &'static str {
        match self {
            Command::Navigate { .. } => "navigate",
            Command::OpenUrl { .. } => "open_url",
            Command::AddTask { .. } => "add_task",
            Command::CompleteTask { .. } => "complete_task",
            Command::AddNote { .. } => "add_note",
            Command::OpenNote { .. } => "open_note",
        }
    }
}
