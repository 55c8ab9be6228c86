use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;

use crate::models::common::StatusResponse;
use crate::services::{UpstreamError, UpstreamResponse};

/// Return an upstream answer as-is: same status, same JSON body.
pub fn relay(response: UpstreamResponse) -> HttpResponse {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
    HttpResponse::build(status).json(response.body)
}

pub fn upstream_failure(context: &str, error: &UpstreamError) -> HttpResponse {
    tracing::error!("Upstream call for {} failed: {}", context, error);
    HttpResponse::BadGateway().json(json!({
        "success": false,
        "message": "Upstream request failed"
    }))
}

pub fn internal_error(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({
        "success": false,
        "message": message
    }))
}

pub fn status_ok() -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse::ok())
}
