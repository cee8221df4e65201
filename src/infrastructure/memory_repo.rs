use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use rand::seq::SliceRandom;

use crate::domain::{
    quote::{NewQuote, Quote, QuoteId},
    repository::{QuoteRepository, TodoRepository},
    todo::{NewTodo, Todo, TodoId, TodoPatch},
};

/// In-process stand-in for [`MongoStore`](super::mongo_repo::MongoStore).
///
/// Clones share the same collections.
#[derive(Clone, Default)]
pub struct MemoryStore {
    quotes: Arc<Mutex<Vec<Quote>>>,
    todos: Arc<Mutex<Vec<Todo>>>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    pub fn quote_count(&self) -> usize { self.quotes.lock().map(|q| q.len()).unwrap_or_default() }

    pub fn todo_count(&self) -> usize { self.todos.lock().map(|t| t.len()).unwrap_or_default() }
}

fn lock<T>(m: &Mutex<T>) -> Result<MutexGuard<'_, T>> { m.lock().map_err(|_| anyhow!("memory store lock poisoned")) }

#[async_trait]
impl QuoteRepository for MemoryStore {
    async fn sample(&self) -> Result<Option<Quote>> {
        Ok(lock(&self.quotes)?.choose(&mut rand::thread_rng()).cloned())
    }

    async fn insert(&self, input: NewQuote) -> Result<Quote> {
        let now = Utc::now();
        let quote = Quote { id: QuoteId::default(), text: input.text, author: input.author, created_at: now, updated_at: now };
        lock(&self.quotes)?.push(quote.clone());
        Ok(quote)
    }

    async fn insert_many(&self, input: Vec<NewQuote>) -> Result<Vec<Quote>> {
        let now = Utc::now();
        let created: Vec<Quote> = input
            .into_iter()
            .map(|q| Quote { id: QuoteId::default(), text: q.text, author: q.author, created_at: now, updated_at: now })
            .collect();
        lock(&self.quotes)?.extend(created.iter().cloned());
        Ok(created)
    }
}

#[async_trait]
impl TodoRepository for MemoryStore {
    async fn create(&self, input: NewTodo) -> Result<Todo> {
        let now = Utc::now();
        let todo = Todo { id: TodoId::default(), text: input.text, completed: false, created_at: now, updated_at: now };
        lock(&self.todos)?.push(todo.clone());
        Ok(todo)
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        // Reverse first so equal timestamps keep newest-inserted first.
        let mut todos: Vec<Todo> = lock(&self.todos)?.iter().rev().cloned().collect();
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(todos)
    }

    async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Option<Todo>> {
        let mut todos = lock(&self.todos)?;
        let Some(todo) = todos.iter_mut().find(|t| t.id == id) else { return Ok(None) };
        if let Some(text) = patch.text { todo.text = text; }
        if let Some(completed) = patch.completed { todo.completed = completed; }
        todo.updated_at = Utc::now();
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: TodoId) -> Result<bool> {
        let mut todos = lock(&self.todos)?;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        Ok(todos.len() < before)
    }
}
