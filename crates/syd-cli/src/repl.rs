//! The interactive demo REPL.
//!
//! Numbered input follows the current screen's actions; slash commands
//! reach the agenda, the task list and the AI assistant from anywhere.

use crate::render::render_screen;
use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::Path;
use std::sync::Arc;
use syd_application::{
    AgendaService, AssistantService, ChatRole, NavigationController, TasksService,
};
use syd_core::{localized, Language, Priority, ScreenProps};
use syd_interaction::Attachment;

const COMMANDS: &[&str] = &[
    "/ask", "/attach", "/notes", "/note", "/newnote", "/delnote", "/extract", "/tasks", "/task",
    "/done", "/deltask", "/go", "/next", "/lang", "/help",
];

/// Rustyline helper: completion, hints and highlighting for slash commands.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// The REPL over the assembled application stack.
pub struct Repl {
    navigation: Arc<NavigationController>,
    assistant: Arc<AssistantService>,
    agenda: AgendaService,
    tasks: TasksService,
}

impl Repl {
    pub fn new(
        navigation: Arc<NavigationController>,
        assistant: Arc<AssistantService>,
        agenda: AgendaService,
        tasks: TasksService,
    ) -> Self {
        Self {
            navigation,
            assistant,
            agenda,
            tasks,
        }
    }

    pub async fn run(self) -> Result<()> {
        let mut rl: Editor<CliHelper, rustyline::history::DefaultHistory> = Editor::new()?;
        rl.set_helper(Some(CliHelper::new()));

        println!("{}", "=== SYD Demo ===".bright_magenta().bold());
        println!(
            "{}",
            "Digita il numero di un'azione, /help per i comandi, 'quit' per uscire.".bright_black()
        );
        self.render_current().await;

        loop {
            let readline = rl.readline(">> ");
            match readline {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed == "quit" || trimmed == "exit" {
                        println!("{}", "Arrivederci!".bright_green());
                        break;
                    }
                    if trimmed.is_empty() {
                        // Bare enter follows the auto-advance pointer.
                        self.advance().await;
                        continue;
                    }
                    let _ = rl.add_history_entry(&line);
                    self.dispatch(trimmed).await;
                }
                Err(rustyline::error::ReadlineError::Interrupted)
                | Err(rustyline::error::ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("{}", format!("input error: {err}").red());
                    break;
                }
            }
        }

        // Flush any pending note autosave before exiting.
        self.agenda.shutdown().await;
        Ok(())
    }

    async fn dispatch(&self, input: &str) {
        if let Ok(choice) = input.parse::<usize>() {
            self.choose_action(choice).await;
            return;
        }

        let (command, rest) = match input.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };

        match command {
            "/help" => self.print_help().await,
            "/go" => {
                self.navigation.navigate(rest).await;
                self.render_current().await;
            }
            "/next" => self.advance().await,
            "/lang" => match Language::parse(rest) {
                Some(language) => {
                    self.navigation.set_language(language).await;
                    self.render_current().await;
                }
                None => println!("{}", "lingue: it | en".yellow()),
            },
            "/ask" => self.ask(rest).await,
            "/attach" => self.attach(rest).await,
            "/notes" => self.list_notes().await,
            "/note" => self.show_note(rest).await,
            "/newnote" => {
                let language = self.navigation.language().await;
                match self.agenda.create_note(language).await {
                    Some(note) => println!("{}", format!("creato appunto {}", note.id).green()),
                    None => println!("{}", "creazione appunto fallita".red()),
                }
            }
            "/delnote" => {
                self.agenda.delete_note(rest).await;
                println!("{}", "appunto eliminato".green());
            }
            "/extract" => self.extract(rest).await,
            "/tasks" => self.list_tasks().await,
            "/task" => self.add_task(rest).await,
            "/done" => {
                self.tasks.toggle_task(rest).await;
                self.list_tasks().await;
            }
            "/deltask" => {
                self.tasks.delete_task(rest).await;
                println!("{}", "attività eliminata".green());
            }
            _ => println!("{}", "comando sconosciuto, /help per la lista".bright_black()),
        }
    }

    async fn render_current(&self) {
        let state = self.navigation.state();
        let state = state.read().await;
        let Some(screen) = self.navigation.graph().get(&state.current_screen_id) else {
            return;
        };
        let props = ScreenProps::new(screen, state.language, &state.one_shot);
        render_screen(&props);
    }

    async fn choose_action(&self, choice: usize) {
        let target = {
            let state = self.navigation.state();
            let state = state.read().await;
            self.navigation
                .graph()
                .get(&state.current_screen_id)
                .and_then(|screen| screen.actions.get(choice.wrapping_sub(1)))
                .map(|action| action.target.clone())
        };
        match target {
            Some(target) => {
                self.navigation.navigate(&target).await;
                self.render_current().await;
            }
            None => println!("{}", "nessuna azione con quel numero".yellow()),
        }
    }

    async fn advance(&self) {
        let next = {
            let state = self.navigation.state();
            let state = state.read().await;
            self.navigation
                .graph()
                .get(&state.current_screen_id)
                .and_then(|screen| screen.next.clone())
        };
        if let Some(next) = next {
            self.navigation.navigate(&next).await;
            self.render_current().await;
        }
    }

    async fn ask(&self, query: &str) {
        let before = self.assistant.transcript().await.len();
        self.navigation.open_assistant(None).await;
        self.assistant.ask(query).await;

        for message in self.assistant.transcript().await.iter().skip(before) {
            match message.role {
                ChatRole::User => {
                    println!("{}", format!("> {}", message.text).green());
                    if let Some(name) = &message.attachment_name {
                        println!("{}", format!("  [allegato: {name}]").bright_black());
                    }
                }
                ChatRole::Assistant if message.is_error => {
                    println!("{}", message.text.red());
                }
                ChatRole::Assistant => {
                    for line in message.text.lines() {
                        println!("{}", line.bright_blue());
                    }
                }
            }
        }
        self.render_current().await;
    }

    async fn attach(&self, path: &str) {
        match Attachment::from_path(Path::new(path)).await {
            Ok(attachment) => {
                println!(
                    "{}",
                    format!("allegato pronto: {}", attachment.file_name).green()
                );
                self.assistant.set_attachment(attachment).await;
            }
            Err(err) => println!("{}", format!("allegato non leggibile: {err}").red()),
        }
    }

    async fn list_notes(&self) {
        let notes = self.agenda.notes().await;
        if notes.is_empty() {
            println!("{}", "nessun appunto".bright_black());
        }
        for note in notes {
            println!(
                "  {} {} {}",
                note.id.bright_cyan(),
                note.date.bright_black(),
                note.title
            );
        }
    }

    async fn show_note(&self, note_id: &str) {
        match self.agenda.note(note_id).await {
            Some(note) => {
                println!("{} ({})", note.title.bold(), note.date.bright_black());
                println!("{}", note.content);
            }
            None => println!("{}", "appunto non trovato".yellow()),
        }
    }

    async fn extract(&self, note_id: &str) {
        let language = self.navigation.language().await;
        let Some(note) = self.agenda.note(note_id).await else {
            println!("{}", "appunto non trovato".yellow());
            return;
        };
        let extraction = self.agenda.extract_actions(&note.content, language).await;
        if let Some(error) = extraction.error {
            println!("{}", error.red());
            return;
        }
        if extraction.tasks.is_empty() {
            println!(
                "{}",
                localized(language, "nessuna attività trovata", "no tasks found").bright_black()
            );
            return;
        }
        for suggestion in extraction.tasks {
            match self.agenda.add_suggested_task(&suggestion, language).await {
                Some(task) => println!("{}", format!("+ {}", task.content).green()),
                None => println!("{}", "salvataggio attività fallito".red()),
            }
        }
    }

    async fn list_tasks(&self) {
        let grouped = self.tasks.open_tasks_by_project().await;
        if grouped.is_empty() {
            println!("{}", "nessuna attività aperta".bright_black());
        }
        for (project, tasks) in grouped {
            println!("{}", project.bold());
            for task in tasks {
                println!(
                    "  {} [{}] {} {}",
                    task.id.bright_cyan(),
                    task.priority.as_str(),
                    task.content,
                    task.due_date
                        .as_deref()
                        .unwrap_or("")
                        .bright_black()
                );
            }
        }
    }

    /// `/task <content> [@project] [!high|!medium|!low] [^YYYY-MM-DD]`
    async fn add_task(&self, rest: &str) {
        let language = self.navigation.language().await;
        let mut content_words: Vec<&str> = Vec::new();
        let mut project = String::new();
        let mut priority = Priority::Medium;
        let mut due_date: Option<String> = None;

        for word in rest.split_whitespace() {
            if let Some(p) = word.strip_prefix('@') {
                project = p.to_string();
            } else if let Some(p) = word.strip_prefix('!') {
                if let Some(parsed) = parse_priority(p) {
                    priority = parsed;
                }
            } else if let Some(d) = word.strip_prefix('^') {
                due_date = Some(d.to_string());
            } else {
                content_words.push(word);
            }
        }

        match self
            .tasks
            .add_task(&content_words.join(" "), &project, priority, due_date, language)
            .await
        {
            Some(task) => println!("{}", format!("+ {}", task.content).green()),
            None => println!("{}", "contenuto mancante".yellow()),
        }
    }

    async fn print_help(&self) {
        println!("{}", "navigazione".bold());
        println!("  <numero>           segui l'azione numerata della schermata");
        println!("  [invio] | /next    avanza (schermate con successore)");
        println!("  /go <id>           vai alla schermata con quell'id");
        println!("  /lang <it|en>      cambia lingua");
        println!("{}", "assistente".bold());
        println!("  /ask <domanda>     interroga l'assistente AI");
        println!("  /attach <file>     allega un file alla prossima domanda");
        println!("{}", "agenda".bold());
        println!("  /notes /note <id> /newnote /delnote <id> /extract <id>");
        println!("{}", "attività".bold());
        println!("  /tasks /task <testo> [@prog] [!prio] [^data] /done <id> /deltask <id>");
    }
}

fn parse_priority(value: &str) -> Option<Priority> {
    match value.to_lowercase().as_str() {
        "high" | "alta" => Some(Priority::High),
        "medium" | "media" => Some(Priority::Medium),
        "low" | "bassa" => Some(Priority::Low),
        _ => None,
    }
}
