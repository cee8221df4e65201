use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::error::{required_text, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(pub ObjectId);

impl TodoId {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        ObjectId::parse_str(raw).map(Self).map_err(|_| ValidationError::InvalidId(raw.to_string()))
    }
}

impl Default for TodoId {
    fn default() -> Self { Self(ObjectId::new()) }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0.to_hex()) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub text: String,
}

impl NewTodo {
    pub fn new(text: Option<&str>) -> Result<Self, ValidationError> {
        required_text(text).map(|text| Self { text }).ok_or(ValidationError::EmptyText)
    }
}

/// Partial update; at least one field is always set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Builds a patch from a loosely typed JSON object.
    ///
    /// A string `text` must be non-blank. Non-string `text` and non-boolean
    /// `completed` values are ignored.
    pub fn from_json(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        let text = match body.get("text") {
            Some(Value::String(s)) => Some(required_text(Some(s.as_str())).ok_or(ValidationError::EmptyText)?),
            _ => None,
        };
        let completed = body.get("completed").and_then(Value::as_bool);
        if text.is_none() && completed.is_none() {
            return Err(ValidationError::NoValidFields);
        }
        Ok(Self { text, completed })
    }
}
