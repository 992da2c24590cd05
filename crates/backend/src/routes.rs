use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A003 Assistant chat relay
        .route(
            "/api/a003-assistant-chat/reply",
            post(handlers::a003_assistant_chat::reply),
        )
}
