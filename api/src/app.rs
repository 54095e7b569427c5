//! Application factory: assembles middleware, routes and shared state.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use rh_core::repositories::{
    FavoriteRepository, ProductRepository, RentalRepository, ReviewRepository, UserRepository,
};
use rh_core::services::PasswordHasher;
use rh_shared::config::CorsConfig;
use rh_shared::types::response::ErrorResponse;

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::{auth, favorites, products, rentals, reviews, users};
use crate::state::AppState;

/// Create and configure the application with all routes wired up.
///
/// Generic over the repository implementations so the HTTP surface can be
/// integration-tested against the in-memory mocks.
pub fn create_app<U, P, R, V, F, H>(
    app_state: web::Data<AppState<U, P, R, V, F, H>>,
    cors_config: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    F: FavoriteRepository + 'static,
    H: PasswordHasher + 'static,
{
    let cors = create_cors(cors_config);
    let jwt = {
        let config = app_state.auth_config.clone();
        move || JwtAuth::new(config.clone())
    };

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::<U, P, R, V, F, H>))
                        .route("/login", web::post().to(auth::login::<U, P, R, V, F, H>)),
                )
                .service(
                    web::scope("/users")
                        .route(
                            "/me",
                            web::get().to(users::get_profile::<U, P, R, V, F, H>).wrap(jwt()),
                        )
                        .route(
                            "/me",
                            web::put().to(users::update_profile::<U, P, R, V, F, H>).wrap(jwt()),
                        )
                        .route(
                            "/me/password",
                            web::post().to(users::change_password::<U, P, R, V, F, H>).wrap(jwt()),
                        )
                        .route(
                            "/me",
                            web::delete().to(users::delete_account::<U, P, R, V, F, H>).wrap(jwt()),
                        ),
                )
                .service(
                    web::scope("/products")
                        .route("/categories", web::get().to(products::categories))
                        .route("/locations", web::get().to(products::locations))
                        .route(
                            "/mine",
                            web::get().to(products::my_products::<U, P, R, V, F, H>).wrap(jwt()),
                        )
                        .route("", web::get().to(products::search::<U, P, R, V, F, H>))
                        .route(
                            "",
                            web::post().to(products::create_product::<U, P, R, V, F, H>).wrap(jwt()),
                        )
                        .route("/{id}", web::get().to(products::get_product::<U, P, R, V, F, H>))
                        .route(
                            "/{id}",
                            web::put().to(products::update_product::<U, P, R, V, F, H>).wrap(jwt()),
                        )
                        .route(
                            "/{id}",
                            web::delete()
                                .to(products::delete_product::<U, P, R, V, F, H>)
                                .wrap(jwt()),
                        ),
                )
                .service(
                    web::scope("/rentals")
                        .route("", web::post().to(rentals::rent::<U, P, R, V, F, H>).wrap(jwt()))
                        .route(
                            "/my",
                            web::get().to(rentals::my_rentals::<U, P, R, V, F, H>).wrap(jwt()),
                        )
                        .route(
                            "/product/{id}",
                            web::get().to(rentals::product_details::<U, P, R, V, F, H>),
                        )
                        .route(
                            "/{id}",
                            web::delete().to(rentals::cancel::<U, P, R, V, F, H>).wrap(jwt()),
                        ),
                )
                .service(
                    web::scope("/reviews")
                        .route(
                            "",
                            web::post().to(reviews::add_review::<U, P, R, V, F, H>).wrap(jwt()),
                        )
                        .route(
                            "/product/{id}/average",
                            web::get().to(reviews::average_stars::<U, P, R, V, F, H>),
                        )
                        .route(
                            "/product/{id}",
                            web::get().to(reviews::product_reviews::<U, P, R, V, F, H>),
                        ),
                )
                .service(
                    web::scope("/favorites")
                        .route(
                            "/toggle/{product_id}",
                            web::post().to(favorites::toggle::<U, P, R, V, F, H>).wrap(jwt()),
                        )
                        .route(
                            "/{product_id}",
                            web::delete().to(favorites::remove::<U, P, R, V, F, H>).wrap(jwt()),
                        )
                        .route("", web::get().to(favorites::list::<U, P, R, V, F, H>).wrap(jwt())),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "renthub-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
