pub mod app_services;
pub mod conversion_services;
pub mod follower_services;
pub mod media_services;
pub mod status_services;
pub mod timeline_services;
pub mod user_services;

pub use conversion_services::DynConversionService;
pub use follower_services::DynFollowerService;
pub use media_services::DynMediaService;
pub use status_services::DynStatusService;
pub use timeline_services::DynTimelineService;
pub use user_services::DynUserService;
