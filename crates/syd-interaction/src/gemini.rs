//! Low-level Gemini REST client.
//!
//! Calls the `generateContent` endpoint directly; no SDK dependency.
//! The higher-level gateway owns prompts, schemas and error localization;
//! this client only moves JSON over HTTP and digs the text out of the
//! response candidates.

use crate::attachment::Attachment;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use syd_core::error::{Result, SydError};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Thin client over the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Creates a client with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Sends a generate-content request and returns the first candidate's
    /// text.
    pub async fn generate(&self, request: &GenerateContentRequest) -> Result<String> {
        let url = format!(
            "{BASE_URL}/{model}:generateContent?key={api_key}",
            model = self.model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|err| SydError::gateway(format!("Gemini request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| SydError::gateway(format!("failed to parse Gemini response: {err}")))?;

        extract_text_response(parsed)
    }
}

/// Builds the single-turn `user` content of a request, with an optional
/// inline attachment.
pub fn user_content(text: String, attachment: Option<&Attachment>) -> Content {
    let mut parts = vec![Part::Text { text }];
    if let Some(attachment) = attachment {
        parts.push(Part::InlineData {
            inline_data: InlineDataPayload {
                mime_type: attachment.mime_type.clone(),
                data: attachment.to_base64(),
            },
        });
    }
    Content {
        role: "user".to_string(),
        parts,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Generation settings; used to force pure-JSON responses against a schema.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

impl GenerationConfig {
    /// JSON output constrained to the given schema.
    pub fn json_with_schema(schema: serde_json::Value) -> Self {
        Self {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    /// A `system` content holding a single text part.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            parts: vec![Part::Text { text: text.into() }],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineDataPayload,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineDataPayload {
    pub mime_type: String,
    pub data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| SydError::gateway("Gemini returned no text in the response candidates"))
}

fn map_http_error(status: StatusCode, body: String) -> SydError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or(body);
    SydError::gateway(format!("Gemini API error ({status}): {message}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_text_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    { "content": { "parts": [{ "text": "primo" }] } },
                    { "content": { "parts": [{ "text": "secondo" }] } }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(extract_text_response(response).unwrap(), "primo");
    }

    #[test]
    fn test_empty_candidates_is_a_gateway_error() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(extract_text_response(response).is_err());
    }
}
