pub mod memory_repository;
pub mod model;
pub mod redis_repository;

pub use memory_repository::InMemoryUserRepo;
pub use model::{DynUserRepository, User, UserRepository};
pub use redis_repository::RedisUserRepo;
