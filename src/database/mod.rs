pub mod media_store;
pub mod pubsub;
pub mod redis_connection;
pub mod status;
pub mod timeline;
pub mod user;

pub use media_store::{DynMediaStore, MediaStore, S3MediaStore};
pub use pubsub::{DynEventPublisher, EventPublisher, RedisEventPublisher, TopicSubscriber};
pub use redis_connection::RedisDatabase;
