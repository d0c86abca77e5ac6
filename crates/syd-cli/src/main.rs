//! `syd` binary: wires the stores, the Gemini gateway and the
//! orchestration layer, then hands control to the REPL.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use syd_application::{
    AgendaService, AssistantService, CommandExecutor, NavigationController, PersistenceGateway,
    ShellEffects, TasksService,
};
use syd_core::{ContentGraph, Language, NoteRepository, TaskRepository};
use syd_infrastructure::{Config, JsonNoteRepository, JsonTaskRepository};
use syd_interaction::{AiGateway, GeminiGateway};
use tracing_subscriber::EnvFilter;

mod render;
mod repl;
mod shell;

#[derive(Parser)]
#[command(name = "syd")]
#[command(about = "SYD Demo - bilingual presentation deck with an in-app AI agent", long_about = None)]
struct Cli {
    /// Display language (it | en)
    #[arg(long)]
    lang: Option<String>,

    /// Base directory for notes/tasks documents (overrides config)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let data_dir = cli.data_dir.or(config.storage.data_dir);
    let notes: Arc<dyn NoteRepository> = Arc::new(JsonNoteRepository::new(data_dir.as_deref()));
    let tasks: Arc<dyn TaskRepository> = Arc::new(JsonTaskRepository::new(data_dir.as_deref()));
    let persistence = Arc::new(PersistenceGateway::new(notes, tasks));

    let ai: Arc<dyn AiGateway> = {
        let gateway = GeminiGateway::from_config(config.gemini.as_ref());
        if !gateway.is_configured() {
            tracing::info!("no Gemini API key configured, assistant runs in degraded mode");
        }
        Arc::new(gateway)
    };

    let graph = Arc::new(ContentGraph::demo().clone());
    graph.validate()?;

    let terminal: Arc<dyn ShellEffects> = Arc::new(shell::TerminalShell);
    let navigation = Arc::new(NavigationController::new(graph, Arc::clone(&terminal)));
    if let Some(lang) = cli.lang.as_deref() {
        match Language::parse(lang) {
            Some(language) => navigation.set_language(language).await,
            None => tracing::warn!(lang, "unrecognized language, keeping the default"),
        }
    }

    let executor = Arc::new(CommandExecutor::new(
        Arc::clone(&navigation),
        Arc::clone(&persistence),
        terminal,
    ));
    let assistant = Arc::new(AssistantService::new(
        Arc::clone(&ai),
        Arc::clone(&persistence),
        Arc::clone(&navigation),
        executor,
    ));
    let agenda = AgendaService::new(Arc::clone(&persistence), ai);
    let tasks_service = TasksService::new(persistence);

    repl::Repl::new(navigation, assistant, agenda, tasks_service)
        .run()
        .await
}
