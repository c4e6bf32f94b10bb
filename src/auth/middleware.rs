//! 认证中间件
//!
//! 在 Router 级别应用；根据方法 + 路径把请求分类为 admin-only 或公共，
//! admin-only 请求校验静态 Bearer Token。
//!
//! # 错误处理
//!
//! | 情况 | 结果 |
//! |------|------|
//! | 无 Authorization 头 | 401 |
//! | Token 不匹配 | 401 |
//! | 公共路由 / CORS 预检 | 放行 |

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::Method;

use crate::core::ServerState;
use crate::utils::AppError;

/// Admin gate middleware. Public routes and CORS preflight pass through
/// untouched; admin routes require an exact bearer-token match.
pub async fn require_admin(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    if !is_admin_route(&method, &path) {
        return Ok(next.run(req).await);
    }

    let token = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) if token == state.config.admin_token => Ok(next.run(req).await),
        _ => {
            tracing::warn!(target: "security", %method, %path, "admin auth rejected");
            Err(AppError::unauthorized())
        }
    }
}

/// Classify a request as admin-only. Several paths mix public and admin
/// operations by method (e.g. `GET /api/menu` is public, `POST /api/menu`
/// is not), so the classification needs both.
fn is_admin_route(method: &Method, path: &str) -> bool {
    match *method {
        Method::PUT => path == "/api/settings" || path.starts_with("/api/menu/"),
        Method::DELETE => path.starts_with("/api/menu/"),
        Method::POST => {
            path == "/api/menu" || (path.starts_with("/api/rewards/") && path.ends_with("/add"))
        }
        Method::PATCH => path.starts_with("/api/orders/"),
        Method::GET => path == "/api/orders",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_routes_are_gated() {
        assert!(is_admin_route(&Method::PUT, "/api/settings"));
        assert!(is_admin_route(&Method::POST, "/api/menu"));
        assert!(is_admin_route(&Method::PUT, "/api/menu/menu_item:abc"));
        assert!(is_admin_route(&Method::DELETE, "/api/menu/menu_item:abc"));
        assert!(is_admin_route(&Method::GET, "/api/orders"));
        assert!(is_admin_route(&Method::PATCH, "/api/orders/orders:abc"));
        assert!(is_admin_route(&Method::POST, "/api/rewards/600111222/add"));
    }

    #[test]
    fn public_routes_pass() {
        assert!(!is_admin_route(&Method::GET, "/api/settings"));
        assert!(!is_admin_route(&Method::GET, "/api/menu"));
        assert!(!is_admin_route(&Method::POST, "/api/orders"));
        assert!(!is_admin_route(&Method::GET, "/api/orders/track/orders:abc"));
        assert!(!is_admin_route(&Method::POST, "/api/reviews"));
        assert!(!is_admin_route(&Method::GET, "/api/reviews"));
        assert!(!is_admin_route(&Method::GET, "/api/rewards/600111222"));
        assert!(!is_admin_route(&Method::POST, "/api/admin/login"));
        assert!(!is_admin_route(&Method::GET, "/health"));
    }
}
