use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{routing::{patch, post}, Json, Router};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::application::todo_service::TodoService;
use crate::domain::todo::{NewTodo, Todo, TodoId, TodoPatch};
use crate::http::types::{ApiError, ApiJson};

#[derive(Clone)]
pub struct TodosState<S: TodoService> { pub service: S }

pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: TodosState<S>) -> Router {
    Router::new()
        .route("/todos", post(create_todo::<S>).get(list_todos::<S>))
        .route("/todos/:id", patch(update_todo::<S>).delete(delete_todo::<S>))
        .with_state(state)
}

#[derive(Deserialize)]
struct CreateBody { #[serde(default)] text: Option<String> }

async fn create_todo<S: TodoService>(State(state): State<TodosState<S>>, ApiJson(payload): ApiJson<CreateBody>) -> Result<(StatusCode, Json<Value>), ApiError> {
    let input = NewTodo::new(payload.text.as_deref())?;
    let todo = state.service.create(input).await?;
    tracing::info!(id = %todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo_json(&todo))))
}

async fn list_todos<S: TodoService>(State(state): State<TodosState<S>>) -> Result<Json<Value>, ApiError> {
    let todos = state.service.list().await?;
    Ok(Json(Value::Array(todos.iter().map(todo_json).collect())))
}

async fn update_todo<S: TodoService>(State(state): State<TodosState<S>>, Path(id): Path<String>, ApiJson(payload): ApiJson<Map<String, Value>>) -> Result<Json<Value>, ApiError> {
    let id = TodoId::parse(&id)?;
    let patch = TodoPatch::from_json(&payload)?;
    let todo = state.service.update(id, patch).await?;
    Ok(Json(todo_json(&todo)))
}

async fn delete_todo<S: TodoService>(State(state): State<TodosState<S>>, Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    let id = TodoId::parse(&id)?;
    let deleted = state.service.delete(id).await?;
    tracing::info!(id = %deleted, "todo deleted");
    Ok(Json(json!({ "message": "Todo deleted", "id": deleted.to_string() })))
}

fn todo_json(t: &Todo) -> Value {
    json!({ "_id": t.id.to_string(), "text": t.text, "completed": t.completed, "createdAt": t.created_at, "updatedAt": t.updated_at })
}
