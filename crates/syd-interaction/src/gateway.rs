//! The AI gateway: the application's only door to the generative model.
//!
//! Two operations cross this boundary: the task extractor and the
//! conversational command agent. Both return plain data objects whose
//! `error` field carries a short localized message when anything goes
//! wrong (missing key, network failure, malformed model output). Nothing
//! here panics or propagates an error past the boundary.

use crate::attachment::Attachment;
use crate::gemini::{
    user_content, Content, GeminiClient, GenerateContentRequest, GenerationConfig,
};
use crate::sanitize::clean_to_json_object;
use crate::wire::{decode_commands, WireAssistantResponse, WireTaskExtraction};
use async_trait::async_trait;
use syd_core::{localized, Command, Language};
use syd_infrastructure::GeminiConfig;

/// Result of the text-to-task extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskExtraction {
    pub tasks: Vec<String>,
    pub error: Option<String>,
}

/// Result of the conversational command agent.
#[derive(Debug, Clone, Default)]
pub struct AssistantOutcome {
    pub response_text: String,
    pub commands: Vec<Command>,
    pub error: Option<String>,
}

impl AssistantOutcome {
    fn failed(message: String) -> Self {
        Self {
            response_text: String::new(),
            commands: Vec::new(),
            error: Some(message),
        }
    }
}

/// The async façade over the generative-AI service.
#[async_trait]
pub trait AiGateway: Send + Sync {
    /// Extracts actionable to-do phrases from free text.
    async fn extract_tasks(&self, text: &str, language: Language) -> TaskExtraction;

    /// Runs one turn of the in-app command agent.
    async fn assistant_response(
        &self,
        query: &str,
        context: &str,
        attachment: Option<Attachment>,
        language: Language,
    ) -> AssistantOutcome;
}

/// Gemini-backed [`AiGateway`] implementation.
///
/// Built from the optional `[gemini]` configuration: when no API key is
/// configured, every operation degrades to a localized "not configured"
/// error instead of failing construction.
pub struct GeminiGateway {
    client: Option<GeminiClient>,
}

impl GeminiGateway {
    pub fn from_config(config: Option<&GeminiConfig>) -> Self {
        let client = config.map(|c| GeminiClient::new(&c.api_key, &c.model));
        Self { client }
    }

    /// True when an API key is configured.
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }
}

#[async_trait]
impl AiGateway for GeminiGateway {
    async fn extract_tasks(&self, text: &str, language: Language) -> TaskExtraction {
        let Some(client) = &self.client else {
            return TaskExtraction {
                tasks: Vec::new(),
                error: Some(not_configured_message(language)),
            };
        };

        let request = GenerateContentRequest {
            contents: vec![user_content(extractor_prompt(text), None)],
            system_instruction: None,
            generation_config: Some(GenerationConfig::json_with_schema(extractor_schema())),
        };

        let raw = match client.generate(&request).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(%err, "task extraction call failed");
                return TaskExtraction {
                    tasks: Vec::new(),
                    error: Some(call_failed_message(language)),
                };
            }
        };

        parse_extraction(&raw, language)
    }

    async fn assistant_response(
        &self,
        query: &str,
        context: &str,
        attachment: Option<Attachment>,
        language: Language,
    ) -> AssistantOutcome {
        let Some(client) = &self.client else {
            return AssistantOutcome::failed(not_configured_message(language));
        };

        let text = format!("CONTESTO APP:\n{context}\n\nDOMANDA UTENTE:\n\"{query}\"");
        let request = GenerateContentRequest {
            contents: vec![user_content(text, attachment.as_ref())],
            system_instruction: Some(Content::system(assistant_system_instruction(language))),
            generation_config: Some(GenerationConfig::json_with_schema(assistant_schema(
                language,
            ))),
        };

        let raw = match client.generate(&request).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(%err, "assistant call failed");
                return AssistantOutcome::failed(malformed_response_message(language));
            }
        };

        parse_assistant_response(&raw, language)
    }
}

/// Parses raw extractor output: strips formatting noise, then decodes the
/// `{tasks}` object. Unparseable output degrades to a localized error.
fn parse_extraction(raw: &str, language: Language) -> TaskExtraction {
    let cleaned = clean_to_json_object(raw);
    match serde_json::from_str::<WireTaskExtraction>(&cleaned) {
        Ok(wire) => TaskExtraction {
            tasks: wire.tasks,
            error: None,
        },
        Err(err) => {
            tracing::warn!(%err, raw, "task extraction returned unparseable output");
            TaskExtraction {
                tasks: Vec::new(),
                error: Some(call_failed_message(language)),
            }
        }
    }
}

/// Parses raw command-agent output into a validated outcome; malformed
/// commands inside an otherwise valid response are dropped individually.
fn parse_assistant_response(raw: &str, language: Language) -> AssistantOutcome {
    let cleaned = clean_to_json_object(raw);
    match serde_json::from_str::<WireAssistantResponse>(&cleaned) {
        Ok(wire) => AssistantOutcome {
            response_text: wire.response_text,
            commands: decode_commands(wire.commands),
            error: None,
        },
        Err(err) => {
            tracing::warn!(%err, raw, "assistant returned unparseable output");
            AssistantOutcome::failed(malformed_response_message(language))
        }
    }
}

fn assistant_system_instruction(language: Language) -> String {
    let today = chrono::Local::now().format("%d/%m/%Y");
    format!(
        "You are Celerya AI, an in-app process agent. Always return **only** a valid JSON \
         object that matches the schema. No markdown, no code fences, no explanations. If the \
         user request is ambiguous, set responseText to a short clarifying question and \
         commands=[]. Language for responseText: {language}. Today: {today}."
    )
}

fn extractor_prompt(text: &str) -> String {
    format!(
        "Analizza il testo dell'utente ed estrai SOLO attività azionabili (to-do) in forma di \
         frasi chiare.\nRispondi **esclusivamente** con JSON valido conforme allo schema. \
         Nessuna spiegazione, nessun codice.\n\nSchema: {{\"tasks\": string[]}}\n\n\
         Esempio testo:\n\"Ok, domani devo chiamare Andrea..., poi inviare mail a Claudio, e \
         comprare il latte.\"\nEsempio output:\n{{\"tasks\":[\"Chiamare Andrea per il \
         progetto\",\"Mandare la mail di follow-up a Claudio\",\"Comprare il latte\"]}}\n\n\
         Testo da analizzare:\n\"{text}\""
    )
}

fn extractor_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "tasks": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["tasks"]
    })
}

fn assistant_schema(language: Language) -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "responseText": {
                "type": "STRING",
                "description": format!("Reply text for the user, in {language}.")
            },
            "commands": {
                "type": "ARRAY",
                "description": "Sequence of commands for the application to execute.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "action": {
                            "type": "STRING",
                            "enum": ["navigate", "open_url", "add_task", "complete_task", "add_note", "open_note"]
                        },
                        "payload": {
                            "type": "OBJECT",
                            "properties": {
                                "screenId": { "type": "STRING", "nullable": true },
                                "url": { "type": "STRING", "nullable": true },
                                "content": { "type": "STRING", "nullable": true },
                                "project": { "type": "STRING", "nullable": true },
                                "priority": { "type": "STRING", "enum": ["high", "medium", "low"], "nullable": true },
                                "dueDate": { "type": "STRING", "nullable": true },
                                "taskId": { "type": "STRING", "nullable": true },
                                "title": { "type": "STRING", "nullable": true },
                                "noteId": { "type": "STRING", "nullable": true },
                                "date": { "type": "STRING", "nullable": true }
                            }
                        }
                    },
                    "required": ["action", "payload"]
                }
            }
        },
        "required": ["responseText", "commands"]
    })
}

fn not_configured_message(language: Language) -> String {
    localized(
        language,
        "Assistente AI non configurato. Imposta la chiave API di Google Gemini in config.toml \
         o nella variabile d'ambiente GEMINI_API_KEY.",
        "AI Assistant not configured. Set your Google Gemini API key in config.toml or in the \
         GEMINI_API_KEY environment variable.",
    )
}

fn call_failed_message(language: Language) -> String {
    localized(
        language,
        "Errore durante la chiamata all'AI. Verifica che la chiave API sia corretta.",
        "Error calling AI. Verify that your API key is correct.",
    )
}

fn malformed_response_message(language: Language) -> String {
    localized(
        language,
        "Oops! Qualcosa è andato storto. L'AI ha restituito una risposta in un formato non valido.",
        "Oops! Something went wrong. The AI returned a response in an invalid format.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_gateway_reports_localized_error() {
        let gateway = GeminiGateway::from_config(None);
        assert!(!gateway.is_configured());

        let extraction = gateway.extract_tasks("domani chiamo Mario", Language::Italiano).await;
        assert!(extraction.tasks.is_empty());
        assert!(extraction.error.unwrap().contains("non configurato"));

        let outcome = gateway
            .assistant_response("mostrami l'agenda", "", None, Language::English)
            .await;
        assert!(outcome.error.unwrap().contains("not configured"));
    }

    #[test]
    fn test_extraction_parses_clean_output() {
        let parsed = parse_extraction(
            r#"{"tasks":["Call Mario tomorrow","Email Claudio"]}"#,
            Language::English,
        );
        assert_eq!(parsed.tasks, vec!["Call Mario tomorrow", "Email Claudio"]);
        assert!(parsed.error.is_none());
    }

    #[test]
    fn test_extraction_survives_fenced_output() {
        let parsed = parse_extraction("```json\n{\"tasks\": [\"X\"]}\n```", Language::Italiano);
        assert_eq!(parsed.tasks, vec!["X"]);
        assert!(parsed.error.is_none());
    }

    #[test]
    fn test_extraction_garbage_degrades_to_localized_error() {
        let parsed = parse_extraction("sorry, I cannot help", Language::English);
        assert!(parsed.tasks.is_empty());
        assert!(parsed.error.unwrap().contains("Error calling AI"));
    }

    #[test]
    fn test_assistant_response_drops_malformed_commands_only() {
        let raw = r#"{
            "responseText": "Apro l'agenda.",
            "commands": [
                {"action": "teleport", "payload": {}},
                {"action": "navigate", "payload": {"screenId": "agenda"}}
            ]
        }"#;
        let outcome = parse_assistant_response(raw, Language::Italiano);
        assert!(outcome.error.is_none());
        assert_eq!(outcome.response_text, "Apro l'agenda.");
        assert_eq!(
            outcome.commands,
            vec![Command::Navigate {
                screen_id: "agenda".to_string()
            }]
        );
    }

    #[test]
    fn test_schemas_name_every_wire_action() {
        let schema = assistant_schema(Language::Italiano);
        let actions = schema["properties"]["commands"]["items"]["properties"]["action"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(actions.len(), 6);
    }

    #[test]
    fn test_schema_advertises_every_payload_field() {
        // Whatever the wire decoder accepts, the schema must let the model
        // emit; a field missing here is dead on the real wire.
        let schema = assistant_schema(Language::Italiano);
        let payload =
            &schema["properties"]["commands"]["items"]["properties"]["payload"]["properties"];
        for field in [
            "screenId", "url", "content", "project", "priority", "dueDate", "taskId", "title",
            "noteId", "date",
        ] {
            assert!(!payload[field].is_null(), "schema missing payload field {field}");
        }
    }
}
