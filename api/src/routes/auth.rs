//! Registration and login endpoints.

use actix_web::{web, HttpResponse};
use validator::Validate;

use rh_core::errors::DomainError;
use rh_core::repositories::{
    FavoriteRepository, ProductRepository, RentalRepository, ReviewRepository, UserRepository,
};
use rh_core::services::PasswordHasher;
use rh_shared::types::response::{ApiResponse, ErrorResponse};

use crate::dto::auth::{AuthResponse, LoginRequest, ProfileResponse, RegisterRequest};
use crate::handlers::error::{handle_domain_error, validation_failed};
use crate::middleware::auth::issue_token;
use crate::state::AppState;

/// Handler for POST /api/v1/auth/register
///
/// Creates a new account. The email must not already be registered and the
/// password must meet the minimum length.
pub async fn register<U, P, R, V, F, H>(
    state: web::Data<AppState<U, P, R, V, F, H>>,
    request: web::Json<RegisterRequest>,
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
        .register(request.name, request.email, request.phone, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Created().json(ApiResponse::with_data(
            "Account registered",
            ProfileResponse::from(user),
        )),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/auth/login
///
/// Verifies credentials and returns a signed JWT. Unknown email and wrong
/// password both yield the same 401 so accounts cannot be enumerated.
pub async fn login<U, P, R, V, F, H>(
    state: web::Data<AppState<U, P, R, V, F, H>>,
    request: web::Json<LoginRequest>,
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

    let user = match state.accounts.login(&request.email, &request.password).await {
        Ok(user) => user,
        Err(DomainError::Unauthorized) => {
            return HttpResponse::Unauthorized().json(ErrorResponse::new(
                "INVALID_CREDENTIALS",
                "Invalid email or password",
            ));
        }
        Err(error) => return handle_domain_error(error),
    };

    match issue_token(user.id, &state.auth_config) {
        Ok(token) => HttpResponse::Ok().json(AuthResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in: state.auth_config.token_expiry_minutes * 60,
            user: ProfileResponse::from(user),
        }),
        Err(error) => handle_domain_error(error),
    }
}
