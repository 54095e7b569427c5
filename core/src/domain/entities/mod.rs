//! Domain entities representing core business objects.

pub mod favorite;
pub mod product;
pub mod rental;
pub mod review;
pub mod user;

// Re-export commonly used types
pub use favorite::Favorite;
pub use product::{Country, Product, ProductCategory, ProductSummary};
pub use rental::{Rental, RentalStatus};
pub use review::{Review, MAX_STARS, MIN_STARS};
pub use user::User;
