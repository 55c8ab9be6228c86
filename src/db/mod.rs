pub mod events;
pub mod videos;
