//! Wire shapes of the assistant protocol and their validation.
//!
//! The model answers with a loose `{responseText, commands}` object where
//! every command is an `{action, payload}` bag of optional fields. This
//! module owns that shape and the conversion into the typed
//! [`Command`](syd_core::Command) sum type. Conversion is lenient the way
//! the error policy demands: an unknown action or a command missing its
//! required payload field is logged and skipped, never fatal.

use serde::Deserialize;
use syd_core::task::Priority;
use syd_core::Command;

/// The conversational agent's raw reply.
#[derive(Debug, Default, Deserialize)]
pub struct WireAssistantResponse {
    #[serde(default, rename = "responseText")]
    pub response_text: String,
    #[serde(default)]
    pub commands: Vec<WireCommand>,
}

/// The extractor's raw reply.
#[derive(Debug, Default, Deserialize)]
pub struct WireTaskExtraction {
    #[serde(default)]
    pub tasks: Vec<String>,
}

/// One raw command as emitted by the model.
#[derive(Debug, Deserialize)]
pub struct WireCommand {
    pub action: String,
    #[serde(default)]
    pub payload: WirePayload,
}

/// The untyped payload bag shared by all wire actions.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePayload {
    pub screen_id: Option<String>,
    pub url: Option<String>,
    pub content: Option<String>,
    pub project: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<String>,
    pub task_id: Option<String>,
    pub title: Option<String>,
    pub note_id: Option<String>,
    pub date: Option<String>,
}

/// Validates a batch of wire commands into typed commands.
///
/// Invalid entries are dropped individually; the rest of the batch
/// survives.
pub fn decode_commands(wire: Vec<WireCommand>) -> Vec<Command> {
    wire.into_iter().filter_map(decode_command).collect()
}

fn decode_command(wire: WireCommand) -> Option<Command> {
    let WireCommand { action, payload } = wire;
    let command = match action.as_str() {
        "navigate" => Command::Navigate {
            screen_id: require(payload.screen_id, &action, "screenId")?,
        },
        "open_url" => Command::OpenUrl {
            url: require(payload.url, &action, "url")?,
        },
        "add_task" => Command::AddTask {
            content: payload.content,
            project: payload.project,
            priority: payload.priority.as_deref().and_then(parse_priority),
            due_date: payload.due_date,
        },
        "complete_task" => Command::CompleteTask {
            task_id: require(payload.task_id, &action, "taskId")?,
        },
        "add_note" => Command::AddNote {
            title: payload.title,
            content: payload.content,
            date: payload.date,
        },
        "open_note" => Command::OpenNote {
            note_id: require(payload.note_id, &action, "noteId")?,
        },
        other => {
            tracing::warn!(action = other, "skipping command with unknown action");
            return None;
        }
    };
    Some(command)
}

fn require(field: Option<String>, action: &str, name: &str) -> Option<String> {
    let value = field.filter(|v| !v.trim().is_empty());
    if value.is_none() {
        tracing::warn!(action, field = name, "skipping command missing required payload field");
    }
    value
}

fn parse_priority(value: &str) -> Option<Priority> {
    match value.trim().to_lowercase().as_str() {
        "high" => Some(Priority::High),
        "medium" => Some(Priority::Medium),
        "low" => Some(Priority::Low),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(json: &str) -> Vec<WireCommand> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_decode_navigate() {
        let commands = decode_commands(wire(
            r#"[{"action": "navigate", "payload": {"screenId": "agenda"}}]"#,
        ));
        assert_eq!(
            commands,
            vec![Command::Navigate {
                screen_id: "agenda".to_string()
            }]
        );
    }

    #[test]
    fn test_unknown_action_is_dropped_valid_one_survives() {
        let commands = decode_commands(wire(
            r#"[
                {"action": "teleport", "payload": {"screenId": "moon"}},
                {"action": "navigate", "payload": {"screenId": "tasks"}}
            ]"#,
        ));
        assert_eq!(
            commands,
            vec![Command::Navigate {
                screen_id: "tasks".to_string()
            }]
        );
    }

    #[test]
    fn test_complete_task_without_id_is_dropped() {
        let commands = decode_commands(wire(r#"[{"action": "complete_task", "payload": {}}]"#));
        assert!(commands.is_empty());
    }

    #[test]
    fn test_add_task_accepts_missing_optional_fields() {
        let commands = decode_commands(wire(r#"[{"action": "add_task", "payload": {}}]"#));
        assert_eq!(
            commands,
            vec![Command::AddTask {
                content: None,
                project: None,
                priority: None,
                due_date: None,
            }]
        );
    }

    #[test]
    fn test_bogus_priority_falls_back_to_none() {
        let commands = decode_commands(wire(
            r#"[{"action": "add_task", "payload": {"content": "x", "priority": "urgentissimo"}}]"#,
        ));
        match &commands[0] {
            Command::AddTask { priority, .. } => assert!(priority.is_none()),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_missing_payload_defaults_to_empty_bag() {
        let commands = decode_commands(wire(r#"[{"action": "add_note"}]"#));
        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn test_response_text_rename() {
        let response: WireAssistantResponse =
            serde_json::from_str(r#"{"responseText": "Fatto!", "commands": []}"#).unwrap();
        assert_eq!(response.response_text, "Fatto!");
    }
}
