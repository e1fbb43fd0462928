pub mod memory_repository;
pub mod model;
pub mod postgres_repository;
pub mod redis_repository;

pub use memory_repository::InMemoryStatusRepo;
pub use model::{DynStatusRepository, Status, StatusRepository};
pub use postgres_repository::PostgresStatusRepo;
pub use redis_repository::RedisStatusRepo;
