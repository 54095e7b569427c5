//! Review repository trait defining the interface for review persistence.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::DomainResult;

/// Read-model row for product review lists: the review joined with the
/// author's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewWithAuthor {
    pub review: Review,
    pub author_name: String,
}

/// Repository trait for Review entity persistence operations
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Persist a new review
    async fn create(&self, review: Review) -> DomainResult<Review>;

    /// List all reviews for a product, newest first
    async fn find_by_product(&self, product_id: Uuid) -> DomainResult<Vec<ReviewWithAuthor>>;

    /// Mean star rating over a product's reviews, `None` when there are none
    async fn average_stars(&self, product_id: Uuid) -> DomainResult<Option<f64>>;
}
