pub mod aggregate;
pub mod common;
pub mod event;
pub mod query;
pub mod video;
