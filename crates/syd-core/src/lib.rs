//! Domain layer of the SYD demo application.
//!
//! Pure models and contracts: the screen content graph, notes and tasks,
//! the assistant command sum type, session state, and the repository traits
//! the infrastructure layer implements. No I/O happens in this crate.

pub mod command;
pub mod content;
pub mod error;
pub mod language;
pub mod note;
pub mod repository;
pub mod screen;
pub mod session;
pub mod task;

pub use command::Command;
pub use content::ContentGraph;
pub use error::{Result, SydError};
pub use language::{localized, Language, LocalizedText};
pub use note::{Note, NoteDraft};
pub use repository::{NoteRepository, TaskRepository};
pub use screen::{OneShotProps, Screen, ScreenProps, ScreenType};
pub use session::{SessionState, START_SCREEN_ID};
pub use task::{Priority, Task, TaskDraft};
