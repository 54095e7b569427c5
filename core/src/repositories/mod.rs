//! Repository interfaces for data persistence.
//!
//! Each sub-module defines the async trait the infrastructure layer implements
//! plus an in-memory mock used by service tests.

pub mod favorite;
pub mod product;
pub mod rental;
pub mod review;
pub mod user;

pub use favorite::{FavoriteRepository, MockFavoriteRepository};
pub use product::{MockProductRepository, ProductFilter, ProductRepository, SortKey};
pub use rental::{MockRentalRepository, RentalRepository, RentalWithProduct};
pub use review::{MockReviewRepository, ReviewRepository, ReviewWithAuthor};
pub use user::{MockUserRepository, UserRepository};
