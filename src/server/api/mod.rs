pub mod health_controller;
pub mod login_controller;
pub mod media_controller;
pub mod status_controller;
pub mod timeline_controller;
pub mod user_controller;
