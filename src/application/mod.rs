pub mod error;
pub mod quote_service;
pub mod todo_service;
