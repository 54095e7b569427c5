//! Rental DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Booking request for `[start_date, end_date)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentRequest {
    pub product_id: Uuid,
    pub start_date: NaiveDate,
    /// Exclusive end date: the day the product is returned
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentResponse {
    pub rental_id: Uuid,
}
