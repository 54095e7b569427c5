//! Shared application state holding the wired-up core services.

use std::sync::Arc;

use rh_core::repositories::{
    FavoriteRepository, ProductRepository, RentalRepository, ReviewRepository, UserRepository,
};
use rh_core::services::{
    AccountService, CatalogService, FavoriteService, PasswordHasher, RentalService, ReviewService,
};
use rh_shared::config::AuthConfig;

/// Application state shared across all request handlers.
///
/// Generic over the repository traits so tests can run the full HTTP
/// surface against the in-memory mocks.
pub struct AppState<U, P, R, V, F, H>
where
    U: UserRepository,
    P: ProductRepository,
    R: RentalRepository,
    V: ReviewRepository,
    F: FavoriteRepository,
    H: PasswordHasher,
{
    pub accounts: AccountService<U, H>,
    pub catalog: CatalogService<P>,
    pub rentals: RentalService<R, P, V>,
    pub reviews: ReviewService<V, P>,
    pub favorites: FavoriteService<F, P>,
    pub auth_config: AuthConfig,
}

impl<U, P, R, V, F, H> AppState<U, P, R, V, F, H>
where
    U: UserRepository,
    P: ProductRepository,
    R: RentalRepository,
    V: ReviewRepository,
    F: FavoriteRepository,
    H: PasswordHasher,
{
    /// Wire the services from their repository implementations
    pub fn new(
        users: Arc<U>,
        products: Arc<P>,
        rentals: Arc<R>,
        reviews: Arc<V>,
        favorites: Arc<F>,
        hasher: Arc<H>,
        auth_config: AuthConfig,
    ) -> Self {
        Self {
            accounts: AccountService::new(users, hasher),
            catalog: CatalogService::new(products.clone()),
            rentals: RentalService::new(rentals, products.clone(), reviews.clone()),
            reviews: ReviewService::new(reviews, products.clone()),
            favorites: FavoriteService::new(favorites, products),
            auth_config,
        }
    }
}
