//! The assistant service (command interpreter).
//!
//! Owns the chat transcript and the single-flight request gate. One `ask`
//! turn: append the user message, snapshot notes and tasks into a context
//! bundle, call the AI gateway, append the reply per the response policy,
//! then hand any commands to the executor.

use crate::context::assemble_context;
use crate::executor::CommandExecutor;
use crate::gateway::PersistenceGateway;
use crate::navigation::NavigationController;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use syd_core::localized;
use syd_interaction::{AiGateway, Attachment};
use tokio::sync::{Mutex, RwLock};

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry of the chat transcript.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    /// Rendered with error styling when set.
    pub is_error: bool,
    /// Name of the file attached to this message, if any.
    pub attachment_name: Option<String>,
}

impl ChatMessage {
    fn user(text: String, attachment_name: Option<String>) -> Self {
        Self {
            role: ChatRole::User,
            text,
            is_error: false,
            attachment_name,
        }
    }

    fn assistant(text: String) -> Self {
        Self {
            role: ChatRole::Assistant,
            text,
            is_error: false,
            attachment_name: None,
        }
    }

    fn error(text: String) -> Self {
        Self {
            role: ChatRole::Assistant,
            text,
            is_error: true,
            attachment_name: None,
        }
    }
}

/// The conversational agent driving the assistant panel.
pub struct AssistantService {
    ai: Arc<dyn AiGateway>,
    persistence: Arc<PersistenceGateway>,
    navigation: Arc<NavigationController>,
    executor: Arc<CommandExecutor>,
    transcript: RwLock<Vec<ChatMessage>>,
    /// At most one attachment, consumed by the next `ask`.
    attachment: Mutex<Option<Attachment>>,
    /// Single-flight gate: while a request is in flight further `ask`
    /// calls are ignored.
    is_loading: AtomicBool,
}

impl AssistantService {
    pub fn new(
        ai: Arc<dyn AiGateway>,
        persistence: Arc<PersistenceGateway>,
        navigation: Arc<NavigationController>,
        executor: Arc<CommandExecutor>,
    ) -> Self {
        Self {
            ai,
            persistence,
            navigation,
            executor,
            transcript: RwLock::new(Vec::new()),
            attachment: Mutex::new(None),
            is_loading: AtomicBool::new(false),
        }
    }

    /// Snapshot of the transcript, oldest first.
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.read().await.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.load(Ordering::SeqCst)
    }

    /// Stages a file to send with the next query, replacing any staged one.
    pub async fn set_attachment(&self, attachment: Attachment) {
        *self.attachment.lock().await = Some(attachment);
    }

    /// Name of the staged attachment, if any.
    pub async fn attachment_name(&self) -> Option<String> {
        self.attachment
            .lock()
            .await
            .as_ref()
            .map(|a| a.file_name.clone())
    }

    pub async fn clear_attachment(&self) {
        *self.attachment.lock().await = None;
    }

    /// Runs one assistant turn. Blank queries and calls made while a
    /// request is already in flight are ignored.
    pub async fn ask(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        if self.is_loading.swap(true, Ordering::SeqCst) {
            tracing::debug!("assistant busy, dropping query");
            return;
        }

        // The attachment is consumed even if the call fails; the user
        // re-stages it to retry.
        let attachment = self.attachment.lock().await.take();
        let language = self.navigation.language().await;

        self.transcript.write().await.push(ChatMessage::user(
            query.to_string(),
            attachment.as_ref().map(|a| a.file_name.clone()),
        ));

        let notes = self.persistence.get_notes().await;
        let tasks = self.persistence.get_tasks().await;
        let context = assemble_context(self.navigation.graph(), language, &notes, &tasks);

        let outcome = self
            .ai
            .assistant_response(query, &context, attachment, language)
            .await;

        // Errors stop the turn here; commands only run on a clean outcome.
        if let Some(error) = outcome.error {
            self.transcript.write().await.push(ChatMessage::error(error));
            self.is_loading.store(false, Ordering::SeqCst);
            return;
        }

        let reply = if !outcome.response_text.is_empty() {
            ChatMessage::assistant(outcome.response_text)
        } else if !outcome.commands.is_empty() {
            ChatMessage::assistant(localized(
                language,
                "Va bene, eseguo subito.",
                "Okay, doing it now.",
            ))
        } else {
            ChatMessage::error(localized(
                language,
                "Non ho capito la richiesta. Puoi riformularla?",
                "I didn't understand the request. Can you rephrase it?",
            ))
        };
        self.transcript.write().await.push(reply);
        self.is_loading.store(false, Ordering::SeqCst);

        if !outcome.commands.is_empty() {
            self.executor.execute(outcome.commands).await;
        }
    }
}
