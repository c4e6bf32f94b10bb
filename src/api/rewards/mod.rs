//! Rewards API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/rewards", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/{phone}", get(handler::get_account))
        .route("/{phone}/add", post(handler::add_points))
}
