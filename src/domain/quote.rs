use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::error::{required_text, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuoteId(pub ObjectId);

impl Default for QuoteId {
    fn default() -> Self { Self(ObjectId::new()) }
}

impl std::fmt::Display for QuoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0.to_hex()) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub id: QuoteId,
    pub text: String,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A quote that passed validation: trimmed, non-empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    pub text: String,
    pub author: Option<String>,
}

impl NewQuote {
    pub fn new(text: Option<&str>, author: Option<&str>) -> Result<Self, ValidationError> {
        let text = required_text(text).ok_or(ValidationError::EmptyText)?;
        Ok(Self { text, author: required_text(author) })
    }
}

/// Raw `{text, author}` pair as it arrives over the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteFields {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// Body of a quote insert: either `{quotes: [...]}` or a single `{text, author}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuotePayload {
    Batch { quotes: Vec<QuoteFields> },
    Single(QuoteFields),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteInput {
    Single(NewQuote),
    Batch(Vec<NewQuote>),
}

impl TryFrom<QuotePayload> for QuoteInput {
    type Error = ValidationError;

    fn try_from(payload: QuotePayload) -> Result<Self, Self::Error> {
        match payload {
            QuotePayload::Single(fields) => {
                NewQuote::new(fields.text.as_deref(), fields.author.as_deref()).map(QuoteInput::Single)
            }
            QuotePayload::Batch { quotes } => {
                if quotes.is_empty() {
                    return Err(ValidationError::EmptyBatch);
                }
                quotes
                    .iter()
                    .enumerate()
                    .map(|(i, q)| {
                        NewQuote::new(q.text.as_deref(), q.author.as_deref())
                            .map_err(|_| ValidationError::EmptyBatchText(i))
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(QuoteInput::Batch)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: serde_json::Value) -> Result<QuoteInput, ValidationError> {
        let payload: QuotePayload = serde_json::from_value(value).unwrap();
        QuoteInput::try_from(payload)
    }

    #[test]
    fn single_quote_is_trimmed() {
        let input = parse(serde_json::json!({ "text": "  Stay hungry  ", "author": " Jobs " })).unwrap();
        assert_eq!(input, QuoteInput::Single(NewQuote { text: "Stay hungry".into(), author: Some("Jobs".into()) }));
    }

    #[test]
    fn blank_author_becomes_none() {
        let input = parse(serde_json::json!({ "text": "x", "author": "   " })).unwrap();
        assert_eq!(input, QuoteInput::Single(NewQuote { text: "x".into(), author: None }));
    }

    #[test]
    fn whitespace_text_is_rejected() {
        assert_eq!(parse(serde_json::json!({ "text": " \t " })), Err(ValidationError::EmptyText));
        assert_eq!(parse(serde_json::json!({ "author": "nobody" })), Err(ValidationError::EmptyText));
    }

    #[test]
    fn quote_id_displays_as_hex() {
        let id = QuoteId::default();
        assert_eq!(id.to_string(), id.0.to_hex());
        assert_eq!(id.to_string().len(), 24);
    }

    #[test]
    fn batch_shape_is_detected() {
        let input = parse(serde_json::json!({ "quotes": [
            { "text": "a", "author": "A" },
            { "text": "b" },
            { "text": "c", "author": "C" },
        ]}))
        .unwrap();
        let QuoteInput::Batch(items) = input else { panic!("expected batch") };
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].author, None);
    }

    #[test]
    fn batch_rejects_empty_list_and_blank_items() {
        assert_eq!(parse(serde_json::json!({ "quotes": [] })), Err(ValidationError::EmptyBatch));
        assert_eq!(
            parse(serde_json::json!({ "quotes": [{ "text": "ok" }, { "text": "" }] })),
            Err(ValidationError::EmptyBatchText(1))
        );
    }
}
