pub mod backend_health_handler;
pub mod gateway_handler;
pub mod odds_handler;
pub mod responses;
pub mod video_handler;
