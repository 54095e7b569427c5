//! Mock implementation of ReviewRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::DomainResult;

use super::trait_::{ReviewRepository, ReviewWithAuthor};

/// Mock review repository for testing
pub struct MockReviewRepository {
    reviews: Arc<RwLock<HashMap<Uuid, Review>>>,
    author_names: Arc<RwLock<HashMap<Uuid, String>>>,
}

impl MockReviewRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            reviews: Arc::new(RwLock::new(HashMap::new())),
            author_names: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the display name joined in for an author
    pub async fn set_author_name(&self, author_id: Uuid, name: impl Into<String>) {
        self.author_names
            .write()
            .await
            .insert(author_id, name.into());
    }
}

impl Default for MockReviewRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewRepository for MockReviewRepository {
    async fn create(&self, review: Review) -> DomainResult<Review> {
        let mut reviews = self.reviews.write().await;
        reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn find_by_product(&self, product_id: Uuid) -> DomainResult<Vec<ReviewWithAuthor>> {
        let reviews = self.reviews.read().await;
        let names = self.author_names.read().await;

        let mut rows: Vec<ReviewWithAuthor> = reviews
            .values()
            .filter(|r| r.product_id == product_id)
            .map(|r| ReviewWithAuthor {
                review: r.clone(),
                author_name: names
                    .get(&r.author_id)
                    .cloned()
                    .unwrap_or_else(|| "user".to_string()),
            })
            .collect();

        rows.sort_by(|a, b| b.review.created_at.cmp(&a.review.created_at));
        Ok(rows)
    }

    async fn average_stars(&self, product_id: Uuid) -> DomainResult<Option<f64>> {
        let reviews = self.reviews.read().await;
        let stars: Vec<u8> = reviews
            .values()
            .filter(|r| r.product_id == product_id)
            .map(|r| r.stars)
            .collect();

        if stars.is_empty() {
            return Ok(None);
        }
        let sum: u32 = stars.iter().map(|s| u32::from(*s)).sum();
        Ok(Some(f64::from(sum) / stars.len() as f64))
    }
}
