use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use rh_api::app::create_app;
use rh_api::state::AppState;
use rh_infra::{
    BcryptPasswordHasher, DatabasePool, MySqlFavoriteRepository, MySqlProductRepository,
    MySqlRentalRepository, MySqlReviewRepository, MySqlUserRepository,
};
use rh_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();

    info!("Starting RentHub API server on {}", bind_address);

    let pool = DatabasePool::new(&config.database).await?;
    pool.health_check().await?;

    let users = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let products = Arc::new(MySqlProductRepository::new(pool.get_pool().clone()));
    let rentals = Arc::new(MySqlRentalRepository::new(pool.get_pool().clone()));
    let reviews = Arc::new(MySqlReviewRepository::new(pool.get_pool().clone()));
    let favorites = Arc::new(MySqlFavoriteRepository::new(pool.get_pool().clone()));
    let hasher = Arc::new(BcryptPasswordHasher::new());

    let state = web::Data::new(AppState::new(
        users,
        products,
        rentals,
        reviews,
        favorites,
        hasher,
        config.auth.clone(),
    ));

    let cors_config = config.cors.clone();
    let workers = config.server.workers;

    let mut server =
        HttpServer::new(move || create_app(state.clone(), &cors_config)).bind(&bind_address)?;
    if workers > 0 {
        server = server.workers(workers);
    }

    server.run().await?;
    Ok(())
}
