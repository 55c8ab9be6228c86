use actix_web::HttpResponse;

use crate::handlers::responses::status_ok;

/// Liveness only: never touches upstream or the database.
pub async fn backend_health_check() -> HttpResponse {
    status_ok()
}
