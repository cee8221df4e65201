pub mod error;
pub mod quote;
pub mod repository;
pub mod todo;
