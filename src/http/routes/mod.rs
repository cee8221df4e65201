pub mod quotes;
pub mod todos;
