//! Interaction layer: the Gemini-backed AI gateway.
//!
//! Owns everything that touches the generative model: the REST client, the
//! prompts and response schemas, output sanitation, and validation of the
//! wire commands into the typed `Command` sum type.

pub mod attachment;
pub mod gateway;
pub mod gemini;
pub mod sanitize;
pub mod wire;

pub use attachment::Attachment;
pub use gateway::{AiGateway, AssistantOutcome, GeminiGateway, TaskExtraction};
pub use gemini::GeminiClient;
