pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
mod filter;
mod mock;

pub use filter::{ProductFilter, SortKey};
pub use mock::MockProductRepository;
pub use r#trait::ProductRepository;
