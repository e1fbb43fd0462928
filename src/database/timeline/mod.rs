pub mod memory_repository;
pub mod model;
pub mod redis_repository;

pub use memory_repository::InMemoryTimelineRepo;
pub use model::{DynTimelineRepository, Timeline, TimelineEvent, TimelineRepository};
pub use redis_repository::RedisTimelineRepo;
