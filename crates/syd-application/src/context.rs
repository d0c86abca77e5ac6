//! Context bundle assembly for the assistant.
//!
//! Before each query the assistant receives a compact textual snapshot of
//! the user's data plus a description of what the application can do:
//! notes in full (they are the object of analysis), tasks as salient
//! fields only, then the navigable screen catalog and the external links
//! the `open_url` command may target.

use syd_core::{localized, ContentGraph, Language, Note, Screen, Task};

/// Serializes one note for the context bundle. Carries the id (so
/// `open_note` commands can target it) and the full content, by design the
/// assistant reasons over note bodies.
fn note_line(note: &Note) -> String {
    format!(
        "APPUNTO (ID: {}, Data: {}, Titolo: {}):\n{}",
        note.id, note.date, note.title, note.content
    )
}

/// Serializes one task: id plus salient fields only. The id is what a
/// `complete_task` payload must echo back.
fn task_line(task: &Task, language: Language) -> String {
    let status = if task.completed {
        localized(language, "Completata", "Done")
    } else {
        localized(language, "Da fare", "To do")
    };
    format!(
        "ATTIVITA' (ID: {}, {status}, Scadenza: {}, Progetto: {}): {}",
        task.id,
        task.due_date.as_deref().unwrap_or("N/D"),
        task.project,
        task.content
    )
}

/// A one-line purpose for a screen. Prefers the screen's own title line;
/// auto-advancing and diagram screens carry their text in the payload
/// instead, so fall back to the first step or the payload title.
fn screen_purpose(screen: &Screen, language: Language) -> String {
    let first_line = |text: &str| text.lines().next().unwrap_or_default().trim().to_string();

    let title = first_line(screen.text.resolve(language));
    if !title.is_empty() {
        return title;
    }
    if let Some(step) = screen.steps.first() {
        let step_title = first_line(step.text.resolve(language));
        if !step_title.is_empty() {
            return step_title;
        }
    }
    if let Some(eco) = &screen.ecosystem {
        let eco_title = first_line(eco.title.resolve(language));
        if !eco_title.is_empty() {
            return eco_title;
        }
    }
    localized(
        language,
        "Una schermata della presentazione.",
        "A screen of the presentation.",
    )
}

/// The navigable screen catalog: one line per screen, id plus a purpose
/// line so the model can match user intent to ids.
fn screen_catalog(graph: &ContentGraph, language: Language) -> String {
    let mut lines = vec![localized(
        language,
        "- Schermate navigabili (usa l'ID per il comando 'navigate'):",
        "- Navigable screens (use the ID for the 'navigate' command):",
    )];
    for screen in &graph.screens {
        lines.push(format!(
            "    - '{}': {}",
            screen.id,
            screen_purpose(screen, language)
        ));
    }
    lines.join("\n")
}

/// Assembles the full context bundle handed to the AI gateway alongside
/// the user query.
pub fn assemble_context(
    graph: &ContentGraph,
    language: Language,
    notes: &[Note],
    tasks: &[Task],
) -> String {
    let notes_context = notes
        .iter()
        .map(note_line)
        .collect::<Vec<_>>()
        .join("\n\n");
    let tasks_context = tasks
        .iter()
        .map(|t| task_line(t, language))
        .collect::<Vec<_>>()
        .join("\n");

    let links_info = graph
        .external_links()
        .iter()
        .map(|l| format!("- {}: {}", l.label.resolve(language), l.href))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "--- APPUNTI DELL'UTENTE ---\n{notes_context}\n\n\
         --- ATTIVITA' DELL'UTENTE ---\n{tasks_context}\n\n\
         --- INFORMAZIONI SULL'APPLICAZIONE ---\n{catalog}\n\n\
         - Link esterni (usa l'URL per il comando 'open_url'):\n{links_info}",
        catalog = screen_catalog(graph, language),
    )
}
