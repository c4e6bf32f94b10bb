//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{MenuItem, MenuItemCreate};
use crate::db::repository::MenuItemRepository;
use crate::utils::validation::{self, MAX_NAME_LEN, MAX_NOTE_LEN};
use crate::utils::{AppError, AppJson, AppQuery, AppResult};

#[derive(Debug, Deserialize)]
pub struct MenuListQuery {
    pub category: Option<String>,
}

/// GET /api/menu - 列出菜单项 (公共)
///
/// Sorted ascending by title; `?category=` filters by exact match.
pub async fn list(
    State(state): State<ServerState>,
    AppQuery(query): AppQuery<MenuListQuery>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo.find_all(query.category.as_deref()).await?;
    Ok(Json(items))
}

/// POST /api/menu - 创建菜单项 (admin)
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    validate(&payload)?;

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.create(payload).await?;
    Ok(Json(item))
}

/// PUT /api/menu/:id - 全量替换菜单项 (admin)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    validate(&payload)?;

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.update(&id, payload).await?;
    Ok(Json(item))
}

/// DELETE /api/menu/:id - 删除菜单项 (admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = MenuItemRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(format!("Menu item {id} not found")));
    }
    Ok(Json(serde_json::json!({ "ok": true })))
}

fn validate(payload: &MenuItemCreate) -> AppResult<()> {
    validation::validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validation::validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validation::validate_non_negative(payload.price, "price")?;
    validation::validate_optional_url(&payload.image_url, "image_url")?;
    Ok(())
}
