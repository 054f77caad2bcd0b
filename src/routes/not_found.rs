use crate::routes::ApiResponse;
use actix_web::HttpResponse;

/// Catch-all for unrecognized paths and methods. A distinct, non-fatal outcome - not an
/// error path through the submission handler.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::failure("Endpoint not found"))
}
