//! Maps domain errors onto HTTP responses.

use actix_web::HttpResponse;
use log::error;

use rh_core::errors::DomainError;
use rh_shared::types::response::ErrorResponse;

/// Convert a [`DomainError`] into the matching HTTP response.
///
/// Storage and internal failures are logged server-side and surfaced as an
/// opaque 500 so no backend detail leaks to clients.
pub fn handle_domain_error(err: DomainError) -> HttpResponse {
    match err {
        DomainError::Validation { .. } => {
            HttpResponse::BadRequest().json(ErrorResponse::from(err))
        }
        DomainError::Conflict { .. } => HttpResponse::Conflict().json(ErrorResponse::from(err)),
        DomainError::NotFound { .. } => HttpResponse::NotFound().json(ErrorResponse::from(err)),
        DomainError::Unauthorized => HttpResponse::Forbidden().json(ErrorResponse::from(err)),
        DomainError::BusinessRule { .. } => {
            HttpResponse::UnprocessableEntity().json(ErrorResponse::from(err))
        }
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            error!("internal error: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "INTERNAL_ERROR",
                "An internal error occurred",
            ))
        }
    }
}

/// 400 response for request body validation failures
pub fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(
        "VALIDATION_ERROR",
        format!("Invalid request data: {}", errors),
    ))
}
