pub mod media_format_utils;
pub mod metrics_utils;
pub mod token_utils;
