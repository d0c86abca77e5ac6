mod common;

use common::{FailingNoteRepository, FailingTaskRepository, Harness};
use std::sync::Arc;
use syd_application::PersistenceGateway;
use syd_core::{NoteDraft, Priority, TaskDraft};

fn failing_gateway() -> PersistenceGateway {
    PersistenceGateway::new(Arc::new(FailingNoteRepository), Arc::new(FailingTaskRepository))
}

#[tokio::test]
async fn test_storage_failures_degrade_to_empty_reads() {
    let gateway = failing_gateway();

    assert!(gateway.get_notes().await.is_empty());
    assert!(gateway.get_tasks().await.is_empty());
    assert_eq!(gateway.get_note("n1").await, None);
    assert_eq!(gateway.get_task("t1").await, None);
}

#[tokio::test]
async fn test_storage_failures_swallow_writes() {
    let gateway = failing_gateway();

    let note = gateway
        .add_note(NoteDraft {
            title: "Appunto".to_string(),
            content: String::new(),
            date: "2026-08-29".to_string(),
        })
        .await;
    assert!(note.is_none());

    // Mutations on a dead store must not panic or propagate.
    gateway
        .update_note(
            "n1",
            NoteDraft {
                title: "x".to_string(),
                content: String::new(),
                date: "2026-08-29".to_string(),
            },
        )
        .await;
    gateway.delete_note("n1").await;
    gateway.delete_task("t1").await;
}

#[tokio::test]
async fn test_working_store_round_trips_through_gateway() {
    let h = Harness::new();

    let task = h
        .persistence
        .add_task(TaskDraft {
            content: "Chiamare Andrea".to_string(),
            completed: false,
            created_at: "2026-08-29T08:00:00Z".to_string(),
            priority: Priority::Low,
            due_date: Some("2026-09-01".to_string()),
            project: "Demo".to_string(),
        })
        .await
        .unwrap();

    let fetched = h.persistence.get_task(&task.id).await.unwrap();
    assert_eq!(fetched.content, "Chiamare Andrea");
    assert_eq!(fetched.due_date.as_deref(), Some("2026-09-01"));

    h.persistence.delete_task(&task.id).await;
    assert_eq!(h.persistence.get_task(&task.id).await, None);
}
