//! Review endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use rh_core::repositories::{
    FavoriteRepository, ProductRepository, RentalRepository, ReviewRepository, UserRepository,
};
use rh_core::services::PasswordHasher;
use rh_shared::types::response::ApiResponse;

use crate::dto::review::{AddReviewRequest, AverageStarsResponse};
use crate::handlers::error::{handle_domain_error, validation_failed};
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for POST /api/v1/reviews
///
/// # Errors
/// - 400 Bad Request: stars outside 1..=5
/// - 404 Not Found: product does not exist
/// - 422 Unprocessable Entity: owners cannot review their own listings
pub async fn add_review<U, P, R, V, F, H>(
    state: web::Data<AppState<U, P, R, V, F, H>>,
    auth: AuthContext,
    request: web::Json<AddReviewRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    F: FavoriteRepository + 'static,
    H: PasswordHasher + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_failed(errors);
    }

    let request = request.into_inner();
    match state
        .reviews
        .add_review(request.product_id, auth.user_id, request.stars, request.comment)
        .await
    {
        Ok(review) => HttpResponse::Created().json(ApiResponse::with_data("Review added", review)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/reviews/product/{id}
pub async fn product_reviews<U, P, R, V, F, H>(
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
    match state.reviews.reviews_for_product(path.into_inner()).await {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/reviews/product/{id}/average
pub async fn average_stars<U, P, R, V, F, H>(
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
    let product_id = path.into_inner();
    match state.reviews.average_stars(product_id).await {
        Ok(average_stars) => HttpResponse::Ok().json(AverageStarsResponse {
            product_id,
            average_stars,
        }),
        Err(error) => handle_domain_error(error),
    }
}
