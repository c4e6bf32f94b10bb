//! Rewards API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::RewardAccount;
use crate::db::repository::RewardAccountRepository;
use crate::utils::validation::{self, MAX_SHORT_TEXT_LEN};
use crate::utils::{AppJson, AppResult};

#[derive(Debug, Deserialize)]
pub struct RewardAdd {
    /// Point delta; may be negative. The balance never drops below zero.
    pub points: i64,
}

/// GET /api/rewards/:phone - 查询积分账户 (公共)
///
/// Lookup-or-create: an unseen phone number gets a fresh Bronze account as
/// a side effect of the read.
pub async fn get_account(
    State(state): State<ServerState>,
    Path(phone): Path<String>,
) -> AppResult<Json<RewardAccount>> {
    validation::validate_required_text(&phone, "phone", MAX_SHORT_TEXT_LEN)?;

    let repo = RewardAccountRepository::new(state.db.clone());
    let account = repo.get_or_create(&phone).await?;
    Ok(Json(account))
}

/// POST /api/rewards/:phone/add - 调整积分 (admin)
pub async fn add_points(
    State(state): State<ServerState>,
    Path(phone): Path<String>,
    AppJson(payload): AppJson<RewardAdd>,
) -> AppResult<Json<RewardAccount>> {
    validation::validate_required_text(&phone, "phone", MAX_SHORT_TEXT_LEN)?;

    let repo = RewardAccountRepository::new(state.db.clone());
    let account = repo.add_points(&phone, payload.points).await?;
    Ok(Json(account))
}
