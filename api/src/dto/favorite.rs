//! Favorite DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub product_id: Uuid,
    /// Whether the product is favorited after the toggle
    pub favorited: bool,
}
