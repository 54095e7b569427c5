//! Review entity: a star rating with a comment left on a product.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest accepted star rating
pub const MIN_STARS: u8 = 1;
/// Highest accepted star rating
pub const MAX_STARS: u8 = 5;

/// Review entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier for the review
    pub id: Uuid,

    /// Reviewed product
    pub product_id: Uuid,

    /// Author of the review
    pub author_id: Uuid,

    /// Star rating, 1 to 5
    pub stars: u8,

    /// Free-text comment
    pub comment: String,

    /// Timestamp when the review was written
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Creates a new review
    pub fn new(product_id: Uuid, author_id: Uuid, stars: u8, comment: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            author_id,
            stars,
            comment,
            created_at: Utc::now(),
        }
    }

    /// Whether `stars` falls in the accepted range
    pub fn stars_in_range(stars: u8) -> bool {
        (MIN_STARS..=MAX_STARS).contains(&stars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_range() {
        assert!(!Review::stars_in_range(0));
        assert!(Review::stars_in_range(1));
        assert!(Review::stars_in_range(5));
        assert!(!Review::stars_in_range(6));
    }
}
