//! MySQL implementations of the core repository traits.

mod favorite_repository_impl;
mod product_repository_impl;
mod rental_repository_impl;
mod review_repository_impl;
mod user_repository_impl;

pub use favorite_repository_impl::MySqlFavoriteRepository;
pub use product_repository_impl::MySqlProductRepository;
pub use rental_repository_impl::MySqlRentalRepository;
pub use review_repository_impl::MySqlReviewRepository;
pub use user_repository_impl::MySqlUserRepository;
