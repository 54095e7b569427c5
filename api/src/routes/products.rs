//! Product catalog endpoints: search, closed sets and owner-scoped CRUD.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use rh_core::repositories::{
    FavoriteRepository, ProductRepository, RentalRepository, ReviewRepository, UserRepository,
};
use rh_core::services::PasswordHasher;
use rh_core::{Country, ProductCategory};
use rh_shared::types::response::ApiResponse;

use crate::dto::product::{ProductPayload, ProductQuery};
use crate::handlers::error::{handle_domain_error, validation_failed};
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for GET /api/v1/products
///
/// Runs a conjunctive catalog search; every supplied query parameter must
/// match. No parameters returns the whole catalog in the default order.
pub async fn search<U, P, R, V, F, H>(
    state: web::Data<AppState<U, P, R, V, F, H>>,
    query: web::Query<ProductQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    F: FavoriteRepository + 'static,
    H: PasswordHasher + 'static,
{
    let filter = match query.to_filter() {
        Ok(filter) => filter,
        Err(error) => return handle_domain_error(error),
    };

    match state.catalog.search(&filter).await {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/products/{id}
pub async fn get_product<U, P, R, V, F, H>(
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
    match state.catalog.get_product(path.into_inner()).await {
        Ok(Some(product)) => HttpResponse::Ok().json(product),
        Ok(None) => handle_domain_error(rh_core::DomainError::not_found("Product")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/products/mine
pub async fn my_products<U, P, R, V, F, H>(
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
    match state.catalog.products_of_owner(auth.user_id).await {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/products
pub async fn create_product<U, P, R, V, F, H>(
    state: web::Data<AppState<U, P, R, V, F, H>>,
    auth: AuthContext,
    request: web::Json<ProductPayload>,
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

    let data = match request.to_data() {
        Ok(data) => data,
        Err(error) => return handle_domain_error(error),
    };

    match state.catalog.create_product(auth.user_id, data).await {
        Ok(product) => {
            HttpResponse::Created().json(ApiResponse::with_data("Product listed", product))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/products/{id}
///
/// Only the owner may update a listing.
pub async fn update_product<U, P, R, V, F, H>(
    state: web::Data<AppState<U, P, R, V, F, H>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<ProductPayload>,
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

    let data = match request.to_data() {
        Ok(data) => data,
        Err(error) => return handle_domain_error(error),
    };

    match state
        .catalog
        .update_product(path.into_inner(), auth.user_id, data)
        .await
    {
        Ok(product) => {
            HttpResponse::Ok().json(ApiResponse::with_data("Product updated", product))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/products/{id}
///
/// Only the owner may delete a listing.
pub async fn delete_product<U, P, R, V, F, H>(
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
    match state
        .catalog
        .delete_product(path.into_inner(), auth.user_id)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message("Product deleted")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/products/categories
pub async fn categories() -> HttpResponse {
    let names: Vec<&'static str> = ProductCategory::ALL.iter().map(|c| c.as_str()).collect();
    HttpResponse::Ok().json(names)
}

/// Handler for GET /api/v1/products/locations
pub async fn locations() -> HttpResponse {
    let names: Vec<&'static str> = Country::ALL.iter().map(|c| c.as_str()).collect();
    HttpResponse::Ok().json(names)
}
