//! End-to-end tests over the HTTP surface, running the full application
//! against the in-memory repository mocks.

use std::sync::Arc;

use actix_web::{http::header, test, web};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use rh_api::app::create_app;
use rh_api::state::AppState;
use rh_core::repositories::{
    MockFavoriteRepository, MockProductRepository, MockRentalRepository, MockReviewRepository,
    MockUserRepository,
};
use rh_infra::BcryptPasswordHasher;
use rh_shared::config::{AuthConfig, CorsConfig};

type TestState = AppState<
    MockUserRepository,
    MockProductRepository,
    MockRentalRepository,
    MockReviewRepository,
    MockFavoriteRepository,
    BcryptPasswordHasher,
>;

struct TestEnv {
    state: web::Data<TestState>,
    products: Arc<MockProductRepository>,
    favorites: Arc<MockFavoriteRepository>,
}

fn test_env() -> TestEnv {
    let products = Arc::new(MockProductRepository::new());
    let favorites = Arc::new(MockFavoriteRepository::new());

    let state = web::Data::new(AppState::new(
        Arc::new(MockUserRepository::new()),
        products.clone(),
        Arc::new(MockRentalRepository::new()),
        Arc::new(MockReviewRepository::new()),
        favorites.clone(),
        Arc::new(BcryptPasswordHasher::with_cost(4)),
        AuthConfig {
            jwt_secret: "integration-test-secret".to_string(),
            token_expiry_minutes: 60,
            issuer: "renthub".to_string(),
        },
    ));

    TestEnv {
        state,
        products,
        favorites,
    }
}

fn test_state() -> web::Data<TestState> {
    test_env().state
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(create_app($state, &CorsConfig::default())).await
    };
}

/// Registers an account and returns a bearer token for it.
macro_rules! register_and_login {
    ($app:expr, $email:expr) => {{
        let register = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({
                "name": "Test User",
                "email": $email,
                "phone": "+40711111111",
                "password": "parola1234"
            }))
            .to_request();
        let response = test::call_service(&$app, register).await;
        assert_eq!(response.status().as_u16(), 201);

        let login = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": $email, "password": "parola1234" }))
            .to_request();
        let response = test::call_service(&$app, login).await;
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = test::read_body_json(response).await;
        body["token"].as_str().unwrap().to_string()
    }};
}

/// Creates a listing and returns its id.
macro_rules! create_product {
    ($app:expr, $token:expr, $name:expr, $price:expr) => {{
        let request = test::TestRequest::post()
            .uri("/api/v1/products")
            .insert_header(bearer(&$token))
            .set_json(json!({
                "category": "tools",
                "name": $name,
                "description": "integration test listing",
                "price_per_day": $price.to_string(),
                "location": "romania"
            }))
            .to_request();
        let response = test::call_service(&$app, request).await;
        assert_eq!(response.status().as_u16(), 201);

        let body: Value = test::read_body_json(response).await;
        Uuid::parse_str(body["data"]["id"].as_str().unwrap()).unwrap()
    }};
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

#[actix_rt::test]
async fn test_health_endpoint() {
    let app = init_app!(test_state());

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/health").to_request(),
    )
    .await;
    assert!(response.status().is_success());

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_rt::test]
async fn test_login_with_wrong_password_is_401() {
    let app = init_app!(test_state());
    register_and_login!(app, "ana@example.com");

    let login = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": "ana@example.com", "password": "wrong-password" }))
        .to_request();
    let response = test::call_service(&app, login).await;
    assert_eq!(response.status().as_u16(), 401);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "INVALID_CREDENTIALS");
}

#[actix_rt::test]
async fn test_protected_route_requires_token() {
    let app = init_app!(test_state());

    // No token at all: a 401 with the standard error envelope, not a
    // transport-level failure.
    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/users/me").to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 401);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "UNAUTHORIZED");

    // Garbage token: same shape
    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/users/me")
            .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 401);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[actix_rt::test]
async fn test_profile_round_trip() {
    let app = init_app!(test_state());
    let token = register_and_login!(app, "ana@example.com");

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/users/me")
            .insert_header(bearer(&token))
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["email"], "ana@example.com");
    assert!(body.get("password_hash").is_none());

    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/v1/users/me")
            .insert_header(bearer(&token))
            .set_json(json!({ "name": "Ana Maria", "phone": "+40722222222" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["data"]["name"], "Ana Maria");
}

#[actix_rt::test]
async fn test_catalog_search_and_lookup() {
    let app = init_app!(test_state());
    let token = register_and_login!(app, "owner@example.com");

    let drill = create_product!(app, token, "Hammer drill", 25);
    create_product!(app, token, "Road bike", 40);

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/products?search=drill")
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Hammer drill");

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/products/{}", drill))
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 200);

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/products/{}", Uuid::new_v4()))
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 404);
}

#[actix_rt::test]
async fn test_unknown_category_filter_is_400() {
    let app = init_app!(test_state());

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/products?category=spaceships")
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 400);
}

#[actix_rt::test]
async fn test_closed_sets_are_served() {
    let app = init_app!(test_state());

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/products/categories")
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(response).await;
    assert!(body.as_array().unwrap().contains(&json!("tools")));

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/products/locations")
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(response).await;
    assert!(body.as_array().unwrap().contains(&json!("romania")));
}

#[actix_rt::test]
async fn test_only_owner_can_update_listing() {
    let app = init_app!(test_state());
    let owner = register_and_login!(app, "owner@example.com");
    let stranger = register_and_login!(app, "stranger@example.com");

    let product = create_product!(app, owner, "Hammer drill", 25);

    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/products/{}", product))
            .insert_header(bearer(&stranger))
            .set_json(json!({
                "category": "tools",
                "name": "Stolen drill",
                "description": "",
                "price_per_day": "1",
                "location": "romania"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 403);
}

#[actix_rt::test]
async fn test_rental_flow_with_overlap_conflict() {
    let app = init_app!(test_state());
    let owner = register_and_login!(app, "owner@example.com");
    let renter = register_and_login!(app, "renter@example.com");
    let other = register_and_login!(app, "other@example.com");

    let product = create_product!(app, owner, "Hammer drill", 25);

    let start = Utc::now().date_naive() + Duration::days(3);
    let end = start + Duration::days(4);

    let rent = |token: String, start, end| {
        test::TestRequest::post()
            .uri("/api/v1/rentals")
            .insert_header(bearer(&token))
            .set_json(json!({
                "product_id": product,
                "start_date": start,
                "end_date": end
            }))
            .to_request()
    };

    let response = test::call_service(&app, rent(renter.clone(), start, end)).await;
    assert_eq!(response.status().as_u16(), 201);
    let body: Value = test::read_body_json(response).await;
    let rental_id = Uuid::parse_str(body["data"]["rental_id"].as_str().unwrap()).unwrap();

    // Overlapping period is rejected
    let response =
        test::call_service(&app, rent(other.clone(), start + Duration::days(1), end)).await;
    assert_eq!(response.status().as_u16(), 409);

    // Touching period is allowed: ranges are half-open
    let response =
        test::call_service(&app, rent(other.clone(), end, end + Duration::days(2))).await;
    assert_eq!(response.status().as_u16(), 201);

    // Listed under the renter's bookings
    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/rentals/my")
            .insert_header(bearer(&renter))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["status"], "active");

    // Cancelling someone else's rental is indistinguishable from a missing one
    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/v1/rentals/{}", rental_id))
            .insert_header(bearer(&other))
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 404);

    // Cancel by the renter frees the period for others
    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/v1/rentals/{}", rental_id))
            .insert_header(bearer(&renter))
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 200);

    let response = test::call_service(&app, rent(other, start, end)).await;
    assert_eq!(response.status().as_u16(), 201);
}

#[actix_rt::test]
async fn test_rental_in_the_past_is_rejected() {
    let app = init_app!(test_state());
    let owner = register_and_login!(app, "owner@example.com");
    let product = create_product!(app, owner, "Hammer drill", 25);

    let start = Utc::now().date_naive() - Duration::days(2);
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/rentals")
            .insert_header(bearer(&owner))
            .set_json(json!({
                "product_id": product,
                "start_date": start,
                "end_date": start + Duration::days(1)
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 400);
}

#[actix_rt::test]
async fn test_reviews_and_average() {
    let app = init_app!(test_state());
    let owner = register_and_login!(app, "owner@example.com");
    let reviewer = register_and_login!(app, "reviewer@example.com");

    let product = create_product!(app, owner, "Hammer drill", 25);

    // Owners cannot review their own listing
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/reviews")
            .insert_header(bearer(&owner))
            .set_json(json!({ "product_id": product, "stars": 5, "comment": "mine" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 422);

    for stars in [5, 2] {
        let email = format!("r{}@example.com", stars);
        let token = if stars == 5 {
            reviewer.clone()
        } else {
            register_and_login!(app, &email)
        };
        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/reviews")
                .insert_header(bearer(&token))
                .set_json(json!({ "product_id": product, "stars": stars, "comment": "ok" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status().as_u16(), 201);
    }

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/reviews/product/{}/average", product))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["average_stars"], 3.5);

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/reviews/product/{}", product))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[actix_rt::test]
async fn test_favorites_toggle_and_list() {
    let env = test_env();
    let app = init_app!(env.state.clone());
    let owner = register_and_login!(app, "owner@example.com");
    let user = register_and_login!(app, "user@example.com");

    let product = create_product!(app, owner, "Hammer drill", 25);

    // The catalog row joined into favorite lists is seeded on the mock,
    // mirroring what the SQL join produces.
    use rh_core::repositories::ProductRepository as _;
    let summary = env.products.summary_by_id(product).await.unwrap().unwrap();
    env.favorites.set_product(summary).await;

    let toggle = || {
        test::TestRequest::post()
            .uri(&format!("/api/v1/favorites/toggle/{}", product))
            .insert_header(bearer(&user))
            .to_request()
    };

    let response = test::call_service(&app, toggle()).await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["favorited"], true);

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/favorites")
            .insert_header(bearer(&user))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let response = test::call_service(&app, toggle()).await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["favorited"], false);

    // Removing a bookmark that is no longer there is a 404
    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/v1/favorites/{}", product))
            .insert_header(bearer(&user))
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 404);
}

#[actix_rt::test]
async fn test_unknown_route_is_404() {
    let app = init_app!(test_state());

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v2/nothing").to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 404);
}
