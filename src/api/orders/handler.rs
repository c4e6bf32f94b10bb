//! Orders API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate, OrderStatus};
use crate::db::repository::OrderRepository;
use crate::utils::validation::{self, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN};
use crate::utils::{AppError, AppJson, AppQuery, AppResult};

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

/// Customer-facing tracking projection: id and status only, never the
/// full order body.
#[derive(Debug, Serialize)]
pub struct TrackOrderResponse {
    pub id: String,
    pub status: OrderStatus,
}

/// POST /api/orders - 创建订单 (公共，无鉴权)
///
/// Items and totals are stored as supplied; nothing is cross-checked
/// against the menu collection.
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<OrderCreate>,
) -> AppResult<Json<Order>> {
    validate(&payload)?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.create(payload).await?;
    Ok(Json(order))
}

/// GET /api/orders - 列出订单 (admin)，最新的在前
pub async fn list(
    State(state): State<ServerState>,
    AppQuery(query): AppQuery<OrderListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_all(query.status.as_deref()).await?;
    Ok(Json(orders))
}

/// PATCH /api/orders/:id - 更新订单状态 (admin)
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo.update_status(&id, payload.status).await?;
    Ok(Json(order))
}

/// GET /api/orders/track/:id - 订单跟踪 (公共)
pub async fn track(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<TrackOrderResponse>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;

    let id = order
        .id
        .map(|t| t.to_string())
        .ok_or_else(|| AppError::internal("Stored order has no id"))?;
    Ok(Json(TrackOrderResponse {
        id,
        status: order.status,
    }))
}

fn validate(payload: &OrderCreate) -> AppResult<()> {
    validation::validate_optional_text(&payload.customer_name, "customer_name", MAX_NAME_LEN)?;
    validation::validate_optional_text(&payload.table_number, "table_number", MAX_SHORT_TEXT_LEN)?;
    validation::validate_non_negative(payload.total_amount, "total_amount")?;
    for item in &payload.items {
        validation::validate_required_text(&item.title, "items.title", MAX_NAME_LEN)?;
        validation::validate_int_min(item.quantity, "items.quantity", 1)?;
        validation::validate_non_negative(item.unit_price, "items.unit_price")?;
        validation::validate_optional_text(&item.notes, "items.notes", MAX_NOTE_LEN)?;
    }
    Ok(())
}
