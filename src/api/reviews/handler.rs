//! Reviews API Handlers

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Review, ReviewCreate};
use crate::db::repository::ReviewRepository;
use crate::utils::validation::{self, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN};
use crate::utils::{AppJson, AppQuery, AppResult};

const DEFAULT_LIMIT: u32 = 20;

#[derive(Debug, Deserialize)]
pub struct ReviewListQuery {
    pub limit: Option<u32>,
}

/// POST /api/reviews - 创建评价 (公共)
///
/// Inserted unconditionally; `order_id` linkage is not validated.
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<ReviewCreate>,
) -> AppResult<Json<Review>> {
    validation::validate_int_range(payload.rating, "rating", 1, 5)?;
    validation::validate_optional_text(&payload.comment, "comment", MAX_NOTE_LEN)?;
    validation::validate_optional_url(&payload.photo_url, "photo_url")?;
    validation::validate_optional_text(&payload.customer_name, "customer_name", MAX_NAME_LEN)?;
    validation::validate_optional_text(&payload.order_id, "order_id", MAX_SHORT_TEXT_LEN)?;

    let repo = ReviewRepository::new(state.db.clone());
    let review = repo.create(payload).await?;
    Ok(Json(review))
}

/// GET /api/reviews - 最近评价 (公共)，默认 20 条
pub async fn list(
    State(state): State<ServerState>,
    AppQuery(query): AppQuery<ReviewListQuery>,
) -> AppResult<Json<Vec<Review>>> {
    let repo = ReviewRepository::new(state.db.clone());
    let reviews = repo
        .find_recent(query.limit.unwrap_or(DEFAULT_LIMIT))
        .await?;
    Ok(Json(reviews))
}
