use anyhow::{Context, Result};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, DateTime};
use futures::TryStreamExt;
use mongodb::{options::ReturnDocument, Client, Collection, Database};
use serde::{Deserialize, Serialize};

use crate::domain::{
    quote::{NewQuote, Quote, QuoteId},
    repository::{QuoteRepository, TodoRepository},
    todo::{NewTodo, Todo, TodoId, TodoPatch},
};

const QUOTES: &str = "quotes";
const TODOS: &str = "todos";

/// The process-wide database handle. Clones share one connection pool.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Opens the client and pings the server once; there is no retry.
    pub async fn connect(uri: &str, fallback_db: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await.context("invalid MongoDB connection string")?;
        let db = client.default_database().unwrap_or_else(|| client.database(fallback_db));
        db.run_command(doc! { "ping": 1 }).await.context("MongoDB did not answer ping")?;
        Ok(Self { db })
    }

    pub fn database_name(&self) -> &str { self.db.name() }

    pub fn quotes(&self) -> MongoQuoteRepository {
        MongoQuoteRepository { collection: self.db.collection(QUOTES) }
    }

    pub fn todos(&self) -> MongoTodoRepository {
        MongoTodoRepository { collection: self.db.collection(TODOS) }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    created_at: DateTime,
    updated_at: DateTime,
}

impl QuoteDocument {
    fn fresh(input: NewQuote, now: DateTime) -> Self {
        Self { id: ObjectId::new(), text: input.text, author: input.author, created_at: now, updated_at: now }
    }
}

impl From<QuoteDocument> for Quote {
    fn from(d: QuoteDocument) -> Self {
        Quote {
            id: QuoteId(d.id),
            text: d.text,
            author: d.author,
            created_at: d.created_at.to_chrono(),
            updated_at: d.updated_at.to_chrono(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TodoDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    text: String,
    #[serde(default)]
    completed: bool,
    created_at: DateTime,
    updated_at: DateTime,
}

impl From<TodoDocument> for Todo {
    fn from(d: TodoDocument) -> Self {
        Todo {
            id: TodoId(d.id),
            text: d.text,
            completed: d.completed,
            created_at: d.created_at.to_chrono(),
            updated_at: d.updated_at.to_chrono(),
        }
    }
}

#[derive(Clone)]
pub struct MongoQuoteRepository {
    collection: Collection<QuoteDocument>,
}

#[async_trait]
impl QuoteRepository for MongoQuoteRepository {
    async fn sample(&self) -> Result<Option<Quote>> {
        let mut cursor = self
            .collection
            .aggregate([doc! { "$sample": { "size": 1 } }])
            .await
            .context("sampling quotes")?;
        let Some(raw) = cursor.try_next().await.context("reading sampled quote")? else { return Ok(None) };
        let quote: QuoteDocument = bson::from_document(raw).context("decoding sampled quote")?;
        Ok(Some(quote.into()))
    }

    async fn insert(&self, input: NewQuote) -> Result<Quote> {
        let quote = QuoteDocument::fresh(input, DateTime::now());
        self.collection.insert_one(&quote).await.context("inserting quote")?;
        Ok(quote.into())
    }

    async fn insert_many(&self, input: Vec<NewQuote>) -> Result<Vec<Quote>> {
        let now = DateTime::now();
        let quotes: Vec<QuoteDocument> = input.into_iter().map(|q| QuoteDocument::fresh(q, now)).collect();
        self.collection.insert_many(&quotes).await.context("inserting quote batch")?;
        Ok(quotes.into_iter().map(Quote::from).collect())
    }
}

#[derive(Clone)]
pub struct MongoTodoRepository {
    collection: Collection<TodoDocument>,
}

#[async_trait]
impl TodoRepository for MongoTodoRepository {
    async fn create(&self, input: NewTodo) -> Result<Todo> {
        let now = DateTime::now();
        let todo = TodoDocument { id: ObjectId::new(), text: input.text, completed: false, created_at: now, updated_at: now };
        self.collection.insert_one(&todo).await.context("inserting todo")?;
        Ok(todo.into())
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        let todos: Vec<TodoDocument> = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .await
            .context("listing todos")?
            .try_collect()
            .await
            .context("reading todos")?;
        Ok(todos.into_iter().map(Todo::from).collect())
    }

    async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Option<Todo>> {
        let mut set = doc! { "updatedAt": DateTime::now() };
        if let Some(text) = patch.text { set.insert("text", text); }
        if let Some(completed) = patch.completed { set.insert("completed", completed); }

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id.0 }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .with_context(|| format!("updating todo {id}"))?;
        Ok(updated.map(Todo::from))
    }

    async fn delete(&self, id: TodoId) -> Result<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.0 })
            .await
            .with_context(|| format!("deleting todo {id}"))?;
        Ok(result.deleted_count > 0)
    }
}
