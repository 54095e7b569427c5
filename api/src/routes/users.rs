//! Account profile endpoints, all scoped to the authenticated user.

use actix_web::{web, HttpResponse};
use validator::Validate;

use rh_core::repositories::{
    FavoriteRepository, ProductRepository, RentalRepository, ReviewRepository, UserRepository,
};
use rh_core::services::PasswordHasher;
use rh_shared::types::response::ApiResponse;

use crate::dto::auth::{ChangePasswordRequest, DeleteAccountRequest, ProfileResponse, UpdateProfileRequest};
use crate::handlers::error::{handle_domain_error, validation_failed};
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for GET /api/v1/users/me
pub async fn get_profile<U, P, R, V, F, H>(
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
    match state.accounts.get_profile(auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(ProfileResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/users/me
pub async fn update_profile<U, P, R, V, F, H>(
    state: web::Data<AppState<U, P, R, V, F, H>>,
    auth: AuthContext,
    request: web::Json<UpdateProfileRequest>,
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
        .accounts
        .update_profile(auth.user_id, request.name, request.phone)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(ApiResponse::with_data(
            "Profile updated",
            ProfileResponse::from(user),
        )),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/users/me/password
pub async fn change_password<U, P, R, V, F, H>(
    state: web::Data<AppState<U, P, R, V, F, H>>,
    auth: AuthContext,
    request: web::Json<ChangePasswordRequest>,
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

    match state
        .accounts
        .change_password(auth.user_id, &request.current_password, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message("Password changed")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/users/me
///
/// Deleting an account requires re-entering the password.
pub async fn delete_account<U, P, R, V, F, H>(
    state: web::Data<AppState<U, P, R, V, F, H>>,
    auth: AuthContext,
    request: web::Json<DeleteAccountRequest>,
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

    match state
        .accounts
        .delete_account(auth.user_id, &request.password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message("Account deleted")),
        Err(error) => handle_domain_error(error),
    }
}
