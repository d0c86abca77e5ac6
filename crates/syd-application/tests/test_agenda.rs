mod common;

use common::Harness;
use std::sync::Arc;
use std::time::Duration;
use syd_application::{AgendaService, TasksService};
use syd_core::{Language, NoteDraft, Priority};
use syd_interaction::{AiGateway, TaskExtraction};

fn agenda(h: &Harness) -> AgendaService {
    AgendaService::new(
        Arc::clone(&h.persistence),
        Arc::clone(&h.ai) as Arc<dyn AiGateway>,
    )
}

#[tokio::test(start_paused = true)]
async fn test_create_note_uses_localized_placeholder_title() {
    let h = Harness::new();
    let agenda = agenda(&h);

    let note = agenda.create_note(Language::Italiano).await.unwrap();
    assert_eq!(note.title, "Nuovo Appunto");
    assert!(note.content.is_empty());

    let note = agenda.create_note(Language::English).await.unwrap();
    assert_eq!(note.title, "New Note");
}

#[tokio::test(start_paused = true)]
async fn test_rapid_edits_coalesce_into_one_write() {
    let h = Harness::new();
    let agenda = agenda(&h);
    let note = agenda.create_note(Language::Italiano).await.unwrap();

    for i in 1..=5 {
        agenda.edit_note(
            &note.id,
            NoteDraft {
                title: note.title.clone(),
                content: format!("bozza {i}"),
                date: note.date.clone(),
            },
        );
    }
    tokio::time::sleep(Duration::from_secs(2)).await;

    let stored = h.persistence.get_note(&note.id).await.unwrap();
    assert_eq!(stored.content, "bozza 5");
    agenda.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_flushes_the_last_pending_edit() {
    let h = Harness::new();
    let agenda = agenda(&h);
    let note = agenda.create_note(Language::Italiano).await.unwrap();

    agenda.edit_note(
        &note.id,
        NoteDraft {
            title: "Titolo finale".to_string(),
            content: "testo".to_string(),
            date: note.date.clone(),
        },
    );
    agenda.shutdown().await;

    let stored = h.persistence.get_note(&note.id).await.unwrap();
    assert_eq!(stored.title, "Titolo finale");
}

#[tokio::test(start_paused = true)]
async fn test_selection_to_task_conversion() {
    let h = Harness::new();
    let agenda = agenda(&h);

    assert!(agenda
        .create_task_from_selection("   ", Language::Italiano)
        .await
        .is_none());

    let task = agenda
        .create_task_from_selection(" chiamare il fornitore ", Language::Italiano)
        .await
        .unwrap();
    assert_eq!(task.content, "chiamare il fornitore");
    assert_eq!(task.project, "Da Agenda");
    assert_eq!(task.priority, Priority::Medium);
    assert!(!task.completed);
}

#[tokio::test(start_paused = true)]
async fn test_ai_suggestions_become_tasks_under_the_ai_project() {
    let h = Harness::new();
    let agenda = agenda(&h);
    h.ai.push_extraction(TaskExtraction {
        tasks: vec!["Inviare la mail a Claudio".to_string()],
        error: None,
    });

    let extraction = agenda
        .extract_actions("domani mando la mail a Claudio", Language::Italiano)
        .await;
    assert_eq!(extraction.tasks.len(), 1);

    let task = agenda
        .add_suggested_task(&extraction.tasks[0], Language::English)
        .await
        .unwrap();
    assert_eq!(task.project, "From Agenda (AI)");
}

#[tokio::test(start_paused = true)]
async fn test_task_form_defaults_and_toggle() {
    let h = Harness::new();
    let tasks = TasksService::new(Arc::clone(&h.persistence));

    assert!(tasks
        .add_task("", "Vendite", Priority::High, None, Language::Italiano)
        .await
        .is_none());

    let task = tasks
        .add_task("Preparare demo", "  ", Priority::High, Some("".to_string()), Language::Italiano)
        .await
        .unwrap();
    assert_eq!(task.project, "Nessun Progetto");
    assert_eq!(task.due_date, None);

    tasks.toggle_task(&task.id).await;
    assert!(h.persistence.get_task(&task.id).await.unwrap().completed);
    tasks.toggle_task(&task.id).await;
    assert!(!h.persistence.get_task(&task.id).await.unwrap().completed);

    let grouped = tasks.open_tasks_by_project().await;
    assert_eq!(grouped.get("Nessun Progetto").map(Vec::len), Some(1));
}
