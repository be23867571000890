use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers;
use crate::shared::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // AUTH (PUBLIC)
        // ========================================
        .route("/api/register", post(handlers::auth::register))
        .route("/api/login", post(handlers::auth::login))
        // ========================================
        // TEKNISI (Authorization required)
        // ========================================
        .route(
            "/api/teknisi",
            get(handlers::teknisi::list_all).post(handlers::teknisi::create),
        )
        .route(
            "/api/teknisi/:id",
            get(handlers::teknisi::get_by_id)
                .put(handlers::teknisi::update)
                .delete(handlers::teknisi::delete),
        )
        // Старые пути первых версий dashboard
        .route("/api/tampil", get(handlers::teknisi::list_all))
        .route("/api/tambah", post(handlers::teknisi::create))
        .route(
            "/api/tampil/:id",
            get(handlers::teknisi::get_by_id)
                .put(handlers::teknisi::update)
                .delete(handlers::teknisi::delete),
        )
        .route("/api/edit/:id", put(handlers::teknisi::update))
        .route("/api/hapus/:id", delete(handlers::teknisi::delete_alt))
        .with_state(state)
}
