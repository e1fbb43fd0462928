pub mod error_dto;
pub mod health_dto;
pub mod login_dto;
pub mod media_dto;
pub mod status_dto;
pub mod timeline_dto;
pub mod user_dto;
