//! Command executor.
//!
//! Applies the command batch produced by one assistant response: after a
//! fixed display delay (so the user can read the reply) the assistant
//! panel closes and each command is applied in order, one at a time.
//! Malformed or unresolvable commands are dropped with a log line, never
//! surfaced as errors.

use crate::gateway::PersistenceGateway;
use crate::navigation::NavigationController;
use crate::shell::ShellEffects;
use std::sync::Arc;
use std::time::Duration;
use syd_core::{localized, Command, Language, NoteDraft, Priority, TaskDraft};

/// How long the assistant's reply stays on screen before the panel closes
/// and the batch runs.
pub const COMMAND_DISPLAY_DELAY: Duration = Duration::from_millis(1500);

/// Screen the executor navigates to after a lone `add_task`.
const TASKS_SCREEN_ID: &str = "tasks";
/// Screen the executor navigates to after a lone `add_note` or an `open_note`.
const AGENDA_SCREEN_ID: &str = "agenda";

/// Extra navigation appended after a single-command batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// Show the tasks screen so the new task is visible.
    TasksScreen,
    /// Show the agenda with the newly created note pre-selected.
    AgendaWithNewNote,
}

/// Decides the follow-up navigation for a batch. Only a batch consisting
/// of exactly one `add_task` or one `add_note` gets one; in larger batches
/// the model is expected to emit its own `navigate`.
pub fn single_command_follow_up(commands: &[Command]) -> Option<FollowUp> {
    match commands {
        [Command::AddTask { .. }] => Some(FollowUp::TasksScreen),
        [Command::AddNote { .. }] => Some(FollowUp::AgendaWithNewNote),
        _ => None,
    }
}

/// Applies assistant command batches to the rest of the application.
pub struct CommandExecutor {
    navigation: Arc<NavigationController>,
    persistence: Arc<PersistenceGateway>,
    shell: Arc<dyn ShellEffects>,
}

impl CommandExecutor {
    pub fn new(
        navigation: Arc<NavigationController>,
        persistence: Arc<PersistenceGateway>,
        shell: Arc<dyn ShellEffects>,
    ) -> Self {
        Self {
            navigation,
            persistence,
            shell,
        }
    }

    /// Runs a command batch: wait the display delay, close the assistant
    /// panel, apply every command in order.
    ///
    /// Empty batches are a no-op (the panel stays open).
    pub async fn execute(&self, commands: Vec<Command>) {
        if commands.is_empty() {
            return;
        }

        tokio::time::sleep(COMMAND_DISPLAY_DELAY).await;
        self.navigation.close_assistant().await;

        let follow_up = single_command_follow_up(&commands);
        let language = self.navigation.language().await;

        for command in commands {
            tracing::debug!(action = command.action_name(), "applying command");
            self.apply(command, follow_up, language).await;
        }
    }

    async fn apply(&self, command: Command, follow_up: Option<FollowUp>, language: Language) {
        match command {
            Command::Navigate { screen_id } => {
                self.navigation.navigate(&screen_id).await;
            }
            Command::OpenUrl { url } => {
                self.shell.open_url(&url);
            }
            Command::AddTask {
                content,
                project,
                priority,
                due_date,
            } => {
                let draft = TaskDraft {
                    content: content.unwrap_or_else(|| {
                        localized(language, "Nuova attività dall'AI", "New task from AI")
                    }),
                    completed: false,
                    created_at: chrono::Utc::now().to_rfc3339(),
                    priority: priority.unwrap_or(Priority::Medium),
                    due_date,
                    project: project.unwrap_or_else(|| localized(language, "Dall'AI", "From AI")),
                };
                self.persistence.add_task(draft).await;
                if follow_up == Some(FollowUp::TasksScreen) {
                    self.navigation.navigate(TASKS_SCREEN_ID).await;
                }
            }
            Command::CompleteTask { task_id } => {
                // Missing task is a no-op, the model may reference stale data.
                match self.persistence.get_task(&task_id).await {
                    Some(mut task) => {
                        task.completed = true;
                        self.persistence.update_task(&task_id, &task).await;
                    }
                    None => {
                        tracing::debug!(task_id, "complete_task target not found, skipping");
                    }
                }
            }
            Command::AddNote {
                title,
                content,
                date,
            } => {
                let draft = NoteDraft {
                    title: title
                        .unwrap_or_else(|| localized(language, "Nuovo appunto", "New note")),
                    content: content.unwrap_or_default(),
                    date: date
                        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string()),
                };
                let note = self.persistence.add_note(draft).await;
                if follow_up == Some(FollowUp::AgendaWithNewNote) {
                    match note {
                        Some(note) => {
                            self.navigation
                                .navigate_with_note(AGENDA_SCREEN_ID, note.id)
                                .await;
                        }
                        // Store failure: still land on the agenda, nothing
                        // to pre-select.
                        None => self.navigation.navigate(AGENDA_SCREEN_ID).await,
                    }
                }
            }
            Command::OpenNote { note_id } => {
                self.navigation
                    .navigate_with_note(AGENDA_SCREEN_ID, note_id)
                    .await;
            }
        }
    }
}
