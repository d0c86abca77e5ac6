//! Note (agenda entry) domain model.

use serde::{Deserialize, Serialize};

/// A note in the user's agenda.
///
/// Owned by the persistence gateway; the UI only ever holds a cached,
/// possibly stale copy and re-fetches on focus or after a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Opaque id assigned by the store on creation.
    pub id: String,
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    pub title: String,
    pub content: String,
}

/// The id-less document used to create a note.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub date: String,
}

impl Note {
    /// Materializes a stored note from a draft and its assigned id.
    pub fn from_draft(id: impl Into<String>, draft: NoteDraft) -> Self {
        Self {
            id: id.into(),
            date: draft.date,
            title: draft.title,
            content: draft.content,
        }
    }

    /// Returns the id-less document for partial updates.
    pub fn to_draft(&self) -> NoteDraft {
        NoteDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            date: self.date.clone(),
        }
    }
}
