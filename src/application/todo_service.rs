use async_trait::async_trait;

use super::error::{ServiceError, ServiceResult};
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{NewTodo, Todo, TodoId, TodoPatch};

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn create(&self, input: NewTodo) -> ServiceResult<Todo>;
    async fn list(&self) -> ServiceResult<Vec<Todo>>;
    async fn update(&self, id: TodoId, patch: TodoPatch) -> ServiceResult<Todo>;
    async fn delete(&self, id: TodoId) -> ServiceResult<TodoId>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn create(&self, input: NewTodo) -> ServiceResult<Todo> { Ok(self.repo.create(input).await?) }

    async fn list(&self) -> ServiceResult<Vec<Todo>> { Ok(self.repo.list().await?) }

    async fn update(&self, id: TodoId, patch: TodoPatch) -> ServiceResult<Todo> {
        self.repo.update(id, patch).await?.ok_or(ServiceError::NotFound("todo"))
    }

    async fn delete(&self, id: TodoId) -> ServiceResult<TodoId> {
        if self.repo.delete(id).await? { Ok(id) } else { Err(ServiceError::NotFound("todo")) }
    }
}
