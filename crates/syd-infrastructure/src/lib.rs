//! Infrastructure layer: configuration and the on-disk document store.
//!
//! Implements the repository traits of `syd-core` over a directory of JSON
//! documents (one file per entity), plus TOML configuration loading.

pub mod config;
pub mod json_store;
pub mod note_repository;
pub mod paths;
pub mod task_repository;

pub use config::{Config, GeminiConfig, StorageConfig, DEFAULT_GEMINI_MODEL};
pub use json_store::JsonDirStore;
pub use note_repository::JsonNoteRepository;
pub use paths::SydPaths;
pub use task_repository::JsonTaskRepository;
