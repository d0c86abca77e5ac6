//! Application layer: session orchestration.
//!
//! Ties the domain model, the stores and the AI gateway together: the
//! navigation state machine, the assistant turn loop, the command
//! executor, and the agenda/tasks workflows the screens drive.

pub mod agenda;
pub mod assistant;
pub mod context;
pub mod debounce;
pub mod executor;
pub mod gateway;
pub mod navigation;
pub mod shell;
pub mod tasks;

pub use agenda::AgendaService;
pub use assistant::{AssistantService, ChatMessage, ChatRole};
pub use context::assemble_context;
pub use debounce::{Debouncer, AUTOSAVE_WINDOW};
pub use executor::{single_command_follow_up, CommandExecutor, FollowUp, COMMAND_DISPLAY_DELAY};
pub use gateway::PersistenceGateway;
pub use navigation::{NavigationController, TRANSITION_DELAY};
pub use shell::{NullShell, ShellEffects};
pub use tasks::TasksService;
