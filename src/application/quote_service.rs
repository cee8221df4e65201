use async_trait::async_trait;

use super::error::{ServiceError, ServiceResult};
use crate::domain::quote::{Quote, QuoteInput};
use crate::domain::repository::QuoteRepository;

/// What an insert produced, mirroring the shape of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inserted {
    One(Quote),
    Many(Vec<Quote>),
}

#[async_trait]
pub trait QuoteService: Send + Sync + 'static {
    async fn random(&self) -> ServiceResult<Quote>;
    async fn insert(&self, input: QuoteInput) -> ServiceResult<Inserted>;
}

#[derive(Clone)]
pub struct QuoteServiceImpl<R: QuoteRepository> {
    repo: R,
}

impl<R: QuoteRepository> QuoteServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: QuoteRepository> QuoteService for QuoteServiceImpl<R> {
    async fn random(&self) -> ServiceResult<Quote> {
        self.repo.sample().await?.ok_or(ServiceError::NotFound("quote"))
    }

    async fn insert(&self, input: QuoteInput) -> ServiceResult<Inserted> {
        match input {
            QuoteInput::Single(quote) => Ok(Inserted::One(self.repo.insert(quote).await?)),
            QuoteInput::Batch(quotes) => {
                tracing::debug!(count = quotes.len(), "inserting quote batch");
                Ok(Inserted::Many(self.repo.insert_many(quotes).await?))
            }
        }
    }
}
