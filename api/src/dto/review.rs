//! Review DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddReviewRequest {
    pub product_id: Uuid,

    /// Star rating, 1 to 5
    #[validate(range(min = 1, max = 5))]
    pub stars: u8,

    #[validate(length(max = 2000))]
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageStarsResponse {
    pub product_id: Uuid,
    /// `None` when the product has no reviews yet
    pub average_stars: Option<f64>,
}
