//! JSON-directory-backed NoteRepository implementation.

use crate::json_store::JsonDirStore;
use crate::paths::SydPaths;
use async_trait::async_trait;
use std::path::Path;
use syd_core::error::Result;
use syd_core::note::{Note, NoteDraft};
use syd_core::repository::NoteRepository;
use uuid::Uuid;

/// Note repository over a directory of JSON documents.
pub struct JsonNoteRepository {
    store: JsonDirStore,
}

impl JsonNoteRepository {
    /// Creates a repository at the given base directory, or the platform
    /// default when `None`.
    pub fn new(base_dir: Option<&Path>) -> Self {
        let paths = SydPaths::new(base_dir);
        Self {
            store: JsonDirStore::new(paths.notes_dir()),
        }
    }
}

#[async_trait]
impl NoteRepository for JsonNoteRepository {
    async fn list(&self) -> Result<Vec<Note>> {
        let mut notes: Vec<Note> = self.store.load_all().await?;
        // Newest date first, matching the upstream store's query ordering.
        notes.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(notes)
    }

    async fn find_by_id(&self, note_id: &str) -> Result<Option<Note>> {
        self.store.load(note_id).await
    }

    async fn add(&self, draft: NoteDraft) -> Result<Note> {
        let note = Note::from_draft(Uuid::new_v4().to_string(), draft);
        self.store.save(&note.id, &note).await?;
        Ok(note)
    }

    async fn update(&self, note_id: &str, draft: NoteDraft) -> Result<()> {
        let note = Note::from_draft(note_id, draft);
        self.store.save(note_id, &note).await
    }

    async fn delete(&self, note_id: &str) -> Result<()> {
        self.store.delete(note_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn draft(title: &str, date: &str) -> NoteDraft {
        NoteDraft {
            title: title.to_string(),
            content: format!("content of {title}"),
            date: date.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_assigns_id_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let repo = JsonNoteRepository::new(Some(dir.path()));

        let note = repo.add(draft("Riunione", "2025-05-02")).await.unwrap();
        assert!(!note.id.is_empty());

        let found = repo.find_by_id(&note.id).await.unwrap().unwrap();
        assert_eq!(found, note);
    }

    #[tokio::test]
    async fn test_list_orders_newest_date_first() {
        let dir = TempDir::new().unwrap();
        let repo = JsonNoteRepository::new(Some(dir.path()));

        repo.add(draft("Vecchio", "2025-01-01")).await.unwrap();
        repo.add(draft("Nuovo", "2025-06-01")).await.unwrap();

        let notes = repo.list().await.unwrap();
        assert_eq!(notes[0].title, "Nuovo");
        assert_eq!(notes[1].title, "Vecchio");
    }

    #[tokio::test]
    async fn test_update_replaces_document() {
        let dir = TempDir::new().unwrap();
        let repo = JsonNoteRepository::new(Some(dir.path()));

        let note = repo.add(draft("Bozza", "2025-05-02")).await.unwrap();
        let mut updated = note.to_draft();
        updated.content = "testo rivisto".to_string();
        repo.update(&note.id, updated).await.unwrap();

        let found = repo.find_by_id(&note.id).await.unwrap().unwrap();
        assert_eq!(found.content, "testo rivisto");
    }

    #[tokio::test]
    async fn test_delete_then_find_is_none() {
        let dir = TempDir::new().unwrap();
        let repo = JsonNoteRepository::new(Some(dir.path()));

        let note = repo.add(draft("Da buttare", "2025-05-02")).await.unwrap();
        repo.delete(&note.id).await.unwrap();
        assert!(repo.find_by_id(&note.id).await.unwrap().is_none());
    }
}
