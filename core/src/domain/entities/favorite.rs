//! Favorite: a user bookmarking a product.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A (user, product) bookmark pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    /// User who favorited the product
    pub user_id: Uuid,

    /// Favorited product
    pub product_id: Uuid,

    /// Timestamp when the favorite was added
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    /// Creates a new favorite pair
    pub fn new(user_id: Uuid, product_id: Uuid) -> Self {
        Self {
            user_id,
            product_id,
            created_at: Utc::now(),
        }
    }
}
