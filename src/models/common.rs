use serde::Serialize;

/// Upstream JSON that lacks a field the snapshot tables need.
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Malformed upstream payload: {0}")]
pub struct MalformedPayload(pub String);

impl MalformedPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: "OK" }
    }
}
