use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::{get, post}, Json, Router};
use serde_json::{json, Value};

use crate::application::quote_service::{Inserted, QuoteService};
use crate::domain::quote::{Quote, QuoteInput, QuotePayload};
use crate::http::types::{ApiError, ApiJson};

#[derive(Clone)]
pub struct QuotesState<S: QuoteService> { pub service: S }

pub fn router<S: QuoteService + Clone + Send + Sync + 'static>(state: QuotesState<S>) -> Router {
    Router::new()
        .route("/quotes/random", get(random_quote::<S>))
        .route("/quotes", post(insert_quotes::<S>))
        .with_state(state)
}

async fn random_quote<S: QuoteService>(State(state): State<QuotesState<S>>) -> Result<Json<Value>, ApiError> {
    let quote = state.service.random().await?;
    Ok(Json(quote_json(&quote)))
}

async fn insert_quotes<S: QuoteService>(State(state): State<QuotesState<S>>, ApiJson(payload): ApiJson<QuotePayload>) -> Result<(StatusCode, Json<Value>), ApiError> {
    let input = QuoteInput::try_from(payload)?;
    let body = match state.service.insert(input).await? {
        Inserted::One(quote) => quote_json(&quote),
        Inserted::Many(quotes) => {
            tracing::info!(count = quotes.len(), "quote batch inserted");
            Value::Array(quotes.iter().map(quote_json).collect())
        }
    };
    Ok((StatusCode::CREATED, Json(body)))
}

fn quote_json(q: &Quote) -> Value {
    json!({ "_id": q.id.to_string(), "text": q.text, "author": q.author, "createdAt": q.created_at, "updatedAt": q.updated_at })
}
