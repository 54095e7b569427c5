//! Rental workflow endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use rh_core::errors::DomainError;
use rh_core::repositories::{
    FavoriteRepository, ProductRepository, RentalRepository, ReviewRepository, UserRepository,
};
use rh_core::services::PasswordHasher;
use rh_shared::types::response::ApiResponse;

use crate::dto::rental::{RentRequest, RentResponse};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for POST /api/v1/rentals
///
/// Books a product for `[start_date, end_date)`.
///
/// # Errors
/// - 400 Bad Request: inverted/empty range or a start date in the past
/// - 404 Not Found: product missing or withdrawn
/// - 409 Conflict: the period collides with an existing booking
pub async fn rent<U, P, R, V, F, H>(
    state: web::Data<AppState<U, P, R, V, F, H>>,
    auth: AuthContext,
    request: web::Json<RentRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    F: FavoriteRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state
        .rentals
        .rent_product(
            request.product_id,
            auth.user_id,
            request.start_date,
            request.end_date,
        )
        .await
    {
        Ok(rental_id) => HttpResponse::Created().json(ApiResponse::with_data(
            "Rental created",
            RentResponse { rental_id },
        )),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/rentals/my
///
/// The caller's bookings, newest start date first, each annotated with a
/// display status computed from today's date.
pub async fn my_rentals<U, P, R, V, F, H>(
    state: web::Data<AppState<U, P, R, V, F, H>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    F: FavoriteRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state.rentals.get_my_rentals(auth.user_id).await {
        Ok(rentals) => HttpResponse::Ok().json(rentals),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/rentals/{id}
///
/// Cancels a booking. A rental that does not exist and a rental owned by
/// someone else both return 404, so other users' bookings cannot be probed.
pub async fn cancel<U, P, R, V, F, H>(
    state: web::Data<AppState<U, P, R, V, F, H>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    F: FavoriteRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state.rentals.cancel_rental(path.into_inner(), auth.user_id).await {
        Ok(true) => HttpResponse::Ok().json(ApiResponse::message("Rental cancelled")),
        Ok(false) => handle_domain_error(DomainError::not_found("Rental")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/rentals/product/{id}
///
/// Rental-facing product view: listing attributes plus whether it can be
/// booked today and its average rating.
pub async fn product_details<U, P, R, V, F, H>(
    state: web::Data<AppState<U, P, R, V, F, H>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    F: FavoriteRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state.rentals.get_product_details(path.into_inner()).await {
        Ok(Some(details)) => HttpResponse::Ok().json(details),
        Ok(None) => handle_domain_error(DomainError::not_found("Product")),
        Err(error) => handle_domain_error(error),
    }
}
