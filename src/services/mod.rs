pub mod odds_api;
pub mod snapshot_recorder;
pub mod upstream_client;
pub mod video_api;

pub use odds_api::OddsApi;
pub use snapshot_recorder::{record_new_events, record_video, PersistError};
pub use upstream_client::{UpstreamClient, UpstreamError, UpstreamQuery, UpstreamResponse};
pub use video_api::VideoApi;
