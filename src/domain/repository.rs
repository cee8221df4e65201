use async_trait::async_trait;

use super::quote::{NewQuote, Quote};
use super::todo::{NewTodo, Todo, TodoId, TodoPatch};

#[async_trait]
pub trait QuoteRepository: Send + Sync + 'static {
    /// One quote drawn uniformly at random, `None` when the collection is empty.
    async fn sample(&self) -> anyhow::Result<Option<Quote>>;
    async fn insert(&self, input: NewQuote) -> anyhow::Result<Quote>;
    /// Inserts every quote or fails as a whole.
    async fn insert_many(&self, input: Vec<NewQuote>) -> anyhow::Result<Vec<Quote>>;
}

#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn create(&self, input: NewTodo) -> anyhow::Result<Todo>;
    /// Newest first.
    async fn list(&self) -> anyhow::Result<Vec<Todo>>;
    async fn update(&self, id: TodoId, patch: TodoPatch) -> anyhow::Result<Option<Todo>>;
    async fn delete(&self, id: TodoId) -> anyhow::Result<bool>;
}
