//! Server Implementation
//!
//! Router assembly and HTTP bootstrap.

use axum::{Router, middleware};
use http::HeaderValue;
use tower_http::cors::CorsLayer;

use crate::auth::require_admin;
use crate::core::{Config, ServerState};
use crate::utils::{AppError, AppResult};

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::auth::router())
        .merge(crate::api::settings::router())
        .merge(crate::api::menu::router())
        .merge(crate::api::orders::router())
        .merge(crate::api::reviews::router())
        .merge(crate::api::rewards::router())
}

/// CORS policy. Fully open by default, narrowed to a single origin when
/// `CORS_ALLOW_ORIGIN` is configured.
fn cors_layer(config: &Config) -> CorsLayer {
    match config
        .cors_allow_origin
        .as_deref()
        .and_then(|o| o.parse::<HeaderValue>().ok())
    {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([
                http::Method::GET,
                http::Method::POST,
                http::Method::PUT,
                http::Method::PATCH,
                http::Method::DELETE,
                http::Method::OPTIONS,
            ])
            .allow_headers([http::header::AUTHORIZATION, http::header::CONTENT_TYPE])
            .allow_credentials(true),
        None => {
            if config.cors_allow_origin.is_some() {
                tracing::warn!("CORS_ALLOW_ORIGIN is not a valid origin, falling back to open");
            }
            // mirrors the request origin and allows credentials
            CorsLayer::very_permissive()
        }
    }
}

/// Assemble the complete router with middleware and state. Shared between
/// [`Server::run`] and the integration tests.
pub fn build_router(state: ServerState) -> Router {
    let cors = cors_layer(&state.config);
    build_app()
        // 管理端鉴权中间件 - 公共路由在中间件内部放行
        .layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(log_request))
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> AppResult<()> {
        let app = build_router(self.state.clone());

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

        tracing::info!("QR ordering server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutting down...");
            })
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

        Ok(())
    }
}
