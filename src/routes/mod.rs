// src/routes/mod.rs
pub mod chat;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use health::health_handler;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router {
    Router::new()
        .route("/api/chat/league", post(chat_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
}
