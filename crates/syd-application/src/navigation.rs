//! Navigation controller.
//!
//! Owns the session state and drives screen transitions: a navigate call
//! raises the exiting flag (the view layer fades out on it), waits the
//! fixed transition delay, then commits the target atomically. A second
//! navigate during the delay supersedes the first one; only the most
//! recent call commits (last-call-wins, exactly one commit per settled
//! transition).

use crate::shell::ShellEffects;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use syd_core::{ContentGraph, Language, OneShotProps, Screen, SessionState};
use tokio::sync::RwLock;

/// How long the fade-out runs before a transition commits.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(300);

/// Owns the current-screen state machine and the named session-state
/// transitions.
pub struct NavigationController {
    graph: Arc<ContentGraph>,
    state: Arc<RwLock<SessionState>>,
    shell: Arc<dyn ShellEffects>,
    /// Ticket counter for last-call-wins: a transition only commits if no
    /// newer navigate call was issued while it slept.
    epoch: AtomicU64,
}

impl NavigationController {
    pub fn new(graph: Arc<ContentGraph>, shell: Arc<dyn ShellEffects>) -> Self {
        Self {
            graph,
            state: Arc::new(RwLock::new(SessionState::new())),
            shell,
            epoch: AtomicU64::new(0),
        }
    }

    /// Shared handle to the session state (read-mostly; the controller is
    /// the only writer of navigation fields).
    pub fn state(&self) -> Arc<RwLock<SessionState>> {
        Arc::clone(&self.state)
    }

    pub fn graph(&self) -> &ContentGraph {
        &self.graph
    }

    /// Id of the screen currently shown.
    pub async fn current_screen_id(&self) -> String {
        self.state.read().await.current_screen_id.clone()
    }

    /// The screen currently shown, if its id still resolves.
    pub async fn current_screen(&self) -> Option<&Screen> {
        let id = self.current_screen_id().await;
        self.graph.get(&id)
    }

    pub async fn language(&self) -> Language {
        self.state.read().await.language
    }

    /// Navigates to a screen, clearing any one-shot props.
    pub async fn navigate(&self, target_id: &str) {
        self.navigate_internal(target_id, OneShotProps::default())
            .await;
    }

    /// Navigates to a screen carrying a note id as a one-shot prop, so the
    /// target opens with that note pre-selected.
    pub async fn navigate_with_note(&self, target_id: &str, note_id: String) {
        self.navigate_internal(
            target_id,
            OneShotProps {
                initial_note_id: Some(note_id),
            },
        )
        .await;
    }

    async fn navigate_internal(&self, target_id: &str, one_shot: OneShotProps) {
        if !self.graph.contains(target_id) {
            // Unknown target: the screen stays where it is. Not a fault.
            tracing::debug!(target_id, "ignoring navigation to unknown screen");
            return;
        }

        let ticket = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;

        {
            self.state.write().await.is_exiting = true;
        }

        tokio::time::sleep(TRANSITION_DELAY).await;

        if self.epoch.load(Ordering::SeqCst) != ticket {
            // A newer navigate call supersedes this one; it will commit.
            tracing::debug!(target_id, "navigation superseded before commit");
            return;
        }

        {
            let mut state = self.state.write().await;
            state.commit_navigation(target_id.to_string(), one_shot);
        }
        self.shell.reset_scroll();
    }

    /// Named transition: switch display language.
    pub async fn set_language(&self, language: Language) {
        self.state.write().await.set_language(language);
    }

    /// Named transition: open the assistant panel, optionally queueing a
    /// query to fire immediately.
    pub async fn open_assistant(&self, pending_query: Option<String>) {
        self.state.write().await.open_assistant(pending_query);
    }

    /// Named transition: close the assistant panel.
    pub async fn close_assistant(&self) {
        self.state.write().await.close_assistant();
    }

    /// Takes the query queued for the assistant, clearing it.
    pub async fn take_pending_query(&self) -> Option<String> {
        self.state.write().await.take_pending_query()
    }
}
