//! Session state owned by the application shell.
//!
//! All mutable UI session state lives in one explicit, serializable struct,
//! mutated only through the named transitions below (the navigation
//! controller drives the timed ones). No scattered flags.

use crate::language::Language;
use crate::screen::OneShotProps;
use serde::{Deserialize, Serialize};

/// The id of the screen a fresh session starts on.
pub const START_SCREEN_ID: &str = "start";

/// Mutable per-session UI state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Current display language.
    pub language: Language,
    /// Id of the screen currently shown.
    pub current_screen_id: String,
    /// True while a fade-out transition is in flight.
    pub is_exiting: bool,
    /// True while the assistant panel is open.
    pub assistant_open: bool,
    /// Query to send as soon as the assistant panel opens.
    pub pending_query: Option<String>,
    /// One-shot parameters for the next rendered screen.
    #[serde(skip)]
    pub one_shot: OneShotProps,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            language: Language::default(),
            current_screen_id: START_SCREEN_ID.to_string(),
            is_exiting: false,
            assistant_open: false,
            pending_query: None,
            one_shot: OneShotProps::default(),
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Named transition: switch display language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Named transition: open the assistant panel, optionally with a query
    /// to fire immediately.
    pub fn open_assistant(&mut self, pending_query: Option<String>) {
        self.assistant_open = true;
        self.pending_query = pending_query;
    }

    /// Named transition: close the assistant panel.
    pub fn close_assistant(&mut self) {
        self.assistant_open = false;
        self.pending_query = None;
    }

    /// Takes the query queued for the assistant, clearing it.
    pub fn take_pending_query(&mut self) -> Option<String> {
        self.pending_query.take()
    }

    /// Commits a settled navigation: swap the current screen, clear the
    /// exiting flag, install (or clear) the one-shot props.
    ///
    /// Only the navigation controller calls this, after the transition
    /// delay has elapsed.
    pub fn commit_navigation(&mut self, target_id: String, one_shot: OneShotProps) {
        self.current_screen_id = target_id;
        self.is_exiting = false;
        self.one_shot = one_shot;
    }
}
