//! Shared fakes for the orchestration tests: in-memory stores, a
//! recording shell, and a scriptable AI gateway.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use syd_application::{
    AssistantService, CommandExecutor, NavigationController, PersistenceGateway, ShellEffects,
};
use syd_core::{
    ContentGraph, Note, NoteDraft, NoteRepository, Result, SydError, Task, TaskDraft,
    TaskRepository,
};
use syd_interaction::{AiGateway, AssistantOutcome, Attachment, TaskExtraction};

#[derive(Default)]
pub struct MemoryNoteRepository {
    notes: Mutex<Vec<Note>>,
    counter: AtomicUsize,
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn list(&self) -> Result<Vec<Note>> {
        let mut notes = self.notes.lock().unwrap().clone();
        notes.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(notes)
    }

    async fn find_by_id(&self, note_id: &str) -> Result<Option<Note>> {
        Ok(self
            .notes
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == note_id)
            .cloned())
    }

    async fn add(&self, draft: NoteDraft) -> Result<Note> {
        let id = format!("note-{}", self.counter.fetch_add(1, Ordering::SeqCst));
        let note = Note::from_draft(id, draft);
        self.notes.lock().unwrap().push(note.clone());
        Ok(note)
    }

    async fn update(&self, note_id: &str, draft: NoteDraft) -> Result<()> {
        let mut notes = self.notes.lock().unwrap();
        match notes.iter_mut().find(|n| n.id == note_id) {
            Some(note) => {
                *note = Note::from_draft(note_id, draft);
                Ok(())
            }
            None => Err(SydError::not_found("note", note_id)),
        }
    }

    async fn delete(&self, note_id: &str) -> Result<()> {
        self.notes.lock().unwrap().retain(|n| n.id != note_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryTaskRepository {
    tasks: Mutex<Vec<Task>>,
    counter: AtomicUsize,
}

impl MemoryTaskRepository {
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskRepository for MemoryTaskRepository {
    async fn list(&self) -> Result<Vec<Task>> {
        let mut tasks = self.tasks.lock().unwrap().clone();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn find_by_id(&self, task_id: &str) -> Result<Option<Task>> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == task_id)
            .cloned())
    }

    async fn add(&self, draft: TaskDraft) -> Result<Task> {
        let id = format!("task-{}", self.counter.fetch_add(1, Ordering::SeqCst));
        let task = Task::from_draft(id, draft);
        self.tasks.lock().unwrap().push(task.clone());
        Ok(task)
    }

    async fn update(&self, task_id: &str, task: &Task) -> Result<()> {
        let mut tasks = self.tasks.lock().unwrap();
        match tasks.iter_mut().find(|t| t.id == task_id) {
            Some(slot) => {
                *slot = task.clone();
                Ok(())
            }
            None => Err(SydError::not_found("task", task_id)),
        }
    }

    async fn delete(&self, task_id: &str) -> Result<()> {
        self.tasks.lock().unwrap().retain(|t| t.id != task_id);
        Ok(())
    }
}

/// A note store where every operation fails.
pub struct FailingNoteRepository;

#[async_trait]
impl NoteRepository for FailingNoteRepository {
    async fn list(&self) -> Result<Vec<Note>> {
        Err(SydError::data_access("store offline"))
    }

    async fn find_by_id(&self, _note_id: &str) -> Result<Option<Note>> {
        Err(SydError::data_access("store offline"))
    }

    async fn add(&self, _draft: NoteDraft) -> Result<Note> {
        Err(SydError::data_access("store offline"))
    }

    async fn update(&self, _note_id: &str, _draft: NoteDraft) -> Result<()> {
        Err(SydError::data_access("store offline"))
    }

    async fn delete(&self, _note_id: &str) -> Result<()> {
        Err(SydError::data_access("store offline"))
    }
}

/// A task store where every operation fails.
pub struct FailingTaskRepository;

#[async_trait]
impl TaskRepository for FailingTaskRepository {
    async fn list(&self) -> Result<Vec<Task>> {
        Err(SydError::data_access("store offline"))
    }

    async fn find_by_id(&self, _task_id: &str) -> Result<Option<Task>> {
        Err(SydError::data_access("store offline"))
    }

    async fn add(&self, _draft: TaskDraft) -> Result<Task> {
        Err(SydError::data_access("store offline"))
    }

    async fn update(&self, _task_id: &str, _task: &Task) -> Result<()> {
        Err(SydError::data_access("store offline"))
    }

    async fn delete(&self, _task_id: &str) -> Result<()> {
        Err(SydError::data_access("store offline"))
    }
}

/// Shell that records its effects for assertions.
#[derive(Default)]
pub struct RecordingShell {
    resets: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl RecordingShell {
    pub fn reset_count(&self) -> usize {
        self.resets.load(Ordering::SeqCst)
    }

    pub fn opened_urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl ShellEffects for RecordingShell {
    fn reset_scroll(&self) {
        self.resets.fetch_add(1, Ordering::SeqCst);
    }

    fn open_url(&self, url: &str) {
        self.urls.lock().unwrap().push(url.to_string());
    }
}

/// AI gateway that replays scripted outcomes and records what it was asked.
#[derive(Default)]
pub struct StubAiGateway {
    outcomes: Mutex<VecDeque<AssistantOutcome>>,
    extractions: Mutex<VecDeque<TaskExtraction>>,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl StubAiGateway {
    pub fn with_outcome(outcome: AssistantOutcome) -> Self {
        let stub = Self::default();
        stub.outcomes.lock().unwrap().push_back(outcome);
        stub
    }

    pub fn push_outcome(&self, outcome: AssistantOutcome) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn push_extraction(&self, extraction: TaskExtraction) {
        self.extractions.lock().unwrap().push_back(extraction);
    }

    pub fn recorded_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiGateway for StubAiGateway {
    async fn extract_tasks(&self, _text: &str, _language: syd_core::Language) -> TaskExtraction {
        self.extractions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default()
    }

    async fn assistant_response(
        &self,
        query: &str,
        context: &str,
        _attachment: Option<Attachment>,
        _language: syd_core::Language,
    ) -> AssistantOutcome {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), context.to_string()));
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default()
    }
}

/// The full orchestration stack over in-memory stores.
pub struct Harness {
    pub notes: Arc<MemoryNoteRepository>,
    pub tasks: Arc<MemoryTaskRepository>,
    pub shell: Arc<RecordingShell>,
    pub ai: Arc<StubAiGateway>,
    pub persistence: Arc<PersistenceGateway>,
    pub navigation: Arc<NavigationController>,
    pub executor: Arc<CommandExecutor>,
    pub assistant: Arc<AssistantService>,
}

impl Harness {
    pub fn new() -> Self {
        let notes = Arc::new(MemoryNoteRepository::default());
        let tasks = Arc::new(MemoryTaskRepository::default());
        let shell = Arc::new(RecordingShell::default());
        let ai = Arc::new(StubAiGateway::default());

        let persistence = Arc::new(PersistenceGateway::new(
            Arc::clone(&notes) as Arc<dyn NoteRepository>,
            Arc::clone(&tasks) as Arc<dyn TaskRepository>,
        ));
        let graph = Arc::new(ContentGraph::demo().clone());
        let navigation = Arc::new(NavigationController::new(
            graph,
            Arc::clone(&shell) as Arc<dyn ShellEffects>,
        ));
        let executor = Arc::new(CommandExecutor::new(
            Arc::clone(&navigation),
            Arc::clone(&persistence),
            Arc::clone(&shell) as Arc<dyn ShellEffects>,
        ));
        let assistant = Arc::new(AssistantService::new(
            Arc::clone(&ai) as Arc<dyn AiGateway>,
            Arc::clone(&persistence),
            Arc::clone(&navigation),
            Arc::clone(&executor),
        ));

        Self {
            notes,
            tasks,
            shell,
            ai,
            persistence,
            navigation,
            executor,
            assistant,
        }
    }
}
