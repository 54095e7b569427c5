//! Favorite endpoints, all scoped to the authenticated user.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use rh_core::errors::DomainError;
use rh_core::repositories::{
    FavoriteRepository, ProductRepository, RentalRepository, ReviewRepository, UserRepository,
};
use rh_core::services::PasswordHasher;
use rh_shared::types::response::ApiResponse;

use crate::dto::favorite::ToggleResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for POST /api/v1/favorites/toggle/{product_id}
pub async fn toggle<U, P, R, V, F, H>(
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
    let product_id = path.into_inner();
    match state.favorites.toggle(auth.user_id, product_id).await {
        Ok(favorited) => HttpResponse::Ok().json(ToggleResponse {
            product_id,
            favorited,
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/favorites/{product_id}
pub async fn remove<U, P, R, V, F, H>(
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
    match state.favorites.remove(auth.user_id, path.into_inner()).await {
        Ok(true) => HttpResponse::Ok().json(ApiResponse::message("Favorite removed")),
        Ok(false) => handle_domain_error(DomainError::not_found("Favorite")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/favorites
pub async fn list<U, P, R, V, F, H>(
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
    match state.favorites.favorites_of(auth.user_id).await {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(error) => handle_domain_error(error),
    }
}
