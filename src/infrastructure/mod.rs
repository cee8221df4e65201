pub mod memory_repo;
pub mod mongo_repo;
