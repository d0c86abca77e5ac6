//! Agenda workflows on top of the persistence and AI gateways.
//!
//! Note editing autosaves through a debouncer so every keystroke does not
//! hit storage, and the agenda's two task-creation paths live here: direct
//! conversion of a selected phrase, and AI extraction of actionable items
//! from a note body.

use crate::debounce::{Debouncer, AUTOSAVE_WINDOW};
use crate::gateway::PersistenceGateway;
use std::sync::Arc;
use syd_core::{localized, Language, Note, NoteDraft, Task, TaskDraft};
use syd_interaction::{AiGateway, TaskExtraction};

/// Drives the agenda screen: note CRUD with debounced autosave, plus
/// selection-to-task and AI task extraction.
pub struct AgendaService {
    persistence: Arc<PersistenceGateway>,
    ai: Arc<dyn AiGateway>,
    autosave: Debouncer<(String, NoteDraft)>,
}

impl AgendaService {
    pub fn new(persistence: Arc<PersistenceGateway>, ai: Arc<dyn AiGateway>) -> Self {
        let sink_persistence = Arc::clone(&persistence);
        let autosave = Debouncer::new(AUTOSAVE_WINDOW, move |(note_id, draft): (String, NoteDraft)| {
            let persistence = Arc::clone(&sink_persistence);
            async move {
                persistence.update_note(&note_id, draft).await;
            }
        });
        Self {
            persistence,
            ai,
            autosave,
        }
    }

    /// All notes, newest date first.
    pub async fn notes(&self) -> Vec<Note> {
        self.persistence.get_notes().await
    }

    pub async fn note(&self, note_id: &str) -> Option<Note> {
        self.persistence.get_note(note_id).await
    }

    /// Creates a fresh note dated today with a localized placeholder title.
    pub async fn create_note(&self, language: Language) -> Option<Note> {
        let draft = NoteDraft {
            title: localized(language, "Nuovo Appunto", "New Note"),
            content: String::new(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        };
        self.persistence.add_note(draft).await
    }

    /// Records an edit; the write reaches storage after the autosave
    /// window goes quiet. Rapid edits to the same note coalesce.
    pub fn edit_note(&self, note_id: &str, draft: NoteDraft) {
        self.autosave.push((note_id.to_string(), draft));
    }

    pub async fn delete_note(&self, note_id: &str) {
        self.persistence.delete_note(note_id).await;
    }

    /// Flushes any pending autosave. Call on shutdown.
    pub async fn shutdown(self) {
        self.autosave.shutdown().await;
    }

    /// Turns a selected phrase into a task. Blank selections are ignored.
    pub async fn create_task_from_selection(
        &self,
        selection: &str,
        language: Language,
    ) -> Option<Task> {
        let content = selection.trim();
        if content.is_empty() {
            return None;
        }
        let draft = TaskDraft {
            content: content.to_string(),
            completed: false,
            created_at: chrono::Utc::now().to_rfc3339(),
            priority: syd_core::Priority::Medium,
            due_date: None,
            project: localized(language, "Da Agenda", "From Agenda"),
        };
        self.persistence.add_task(draft).await
    }

    /// Asks the AI to extract actionable to-do phrases from a note body.
    pub async fn extract_actions(&self, content: &str, language: Language) -> TaskExtraction {
        self.ai.extract_tasks(content, language).await
    }

    /// Persists one accepted AI suggestion as a task.
    pub async fn add_suggested_task(&self, content: &str, language: Language) -> Option<Task> {
        let draft = TaskDraft {
            content: content.to_string(),
            completed: false,
            created_at: chrono::Utc::now().to_rfc3339(),
            priority: syd_core::Priority::Medium,
            due_date: None,
            project: localized(language, "Da Agenda (AI)", "From Agenda (AI)"),
        };
        self.persistence.add_task(draft).await
    }
}
