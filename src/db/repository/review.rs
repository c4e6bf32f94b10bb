//! Review Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Review, ReviewCreate};
use crate::utils::time::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "review";

#[derive(Clone)]
pub struct ReviewRepository {
    base: BaseRepository,
}

impl ReviewRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, data: ReviewCreate) -> RepoResult<Review> {
        let review = Review {
            id: None,
            rating: data.rating,
            comment: data.comment,
            photo_url: data.photo_url,
            customer_name: data.customer_name,
            order_id: data.order_id,
            created_at: now_millis(),
        };
        let created: Option<Review> = self.base.db().create(TABLE).content(review).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create review".to_string()))
    }

    /// Most recent reviews first, capped at `limit`.
    pub async fn find_recent(&self, limit: u32) -> RepoResult<Vec<Review>> {
        // limit interpolated rather than bound: the embedded SDK mishandles
        // bound LIMIT parameters, and a u32 cannot inject anything.
        let reviews: Vec<Review> = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM review ORDER BY created_at DESC LIMIT {limit}"
            ))
            .await?
            .take(0)?;
        Ok(reviews)
    }
}
