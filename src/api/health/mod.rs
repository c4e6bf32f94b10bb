//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | / | GET | 存活消息 | 无 |
//! | /health | GET | 健康检查 + 数据库连通性 | 无 |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "QR ordering service running" }))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (ok | degraded)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 数据库连通状态
    database: &'static str,
    /// 已存在的集合名
    collections: Vec<String>,
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let (database, collections) = match collection_names(&state).await {
        Ok(names) => ("connected", names),
        Err(e) => {
            tracing::warn!(error = %e, "health check: database not reachable");
            ("unavailable", Vec::new())
        }
    };

    Json(HealthResponse {
        status: if database == "connected" {
            "ok"
        } else {
            "degraded"
        },
        version: env!("CARGO_PKG_VERSION"),
        database,
        collections,
    })
}

async fn collection_names(state: &ServerState) -> Result<Vec<String>, surrealdb::Error> {
    let mut result = state.db.query("INFO FOR DB").await?;
    let info: Option<serde_json::Value> = result.take(0)?;

    let mut names: Vec<String> = info
        .as_ref()
        .and_then(|v| v.get("tables"))
        .and_then(|t| t.as_object())
        .map(|t| t.keys().cloned().collect())
        .unwrap_or_default();
    names.sort();
    Ok(names)
}
