pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::letters::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        .route("/api/v1/letters/validate", post(handlers::handle_validate))
        .route("/api/v1/letters/preview", post(handlers::handle_preview))
        .route("/api/v1/letters/generate", post(handlers::handle_generate))
        .route("/api/v1/letters/current", get(handlers::handle_get_current))
        .route(
            "/api/v1/letters/current/details",
            put(handlers::handle_update_details),
        )
        .route(
            "/api/v1/letters/current/template",
            put(handlers::handle_select_template),
        )
        .route(
            "/api/v1/letters/current/skills",
            post(handlers::handle_add_skill),
        )
        .route(
            "/api/v1/letters/current/skills/:index",
            delete(handlers::handle_remove_skill),
        )
        .route(
            "/api/v1/letters/current/achievements",
            post(handlers::handle_add_achievement),
        )
        .route(
            "/api/v1/letters/current/achievements/:index",
            delete(handlers::handle_remove_achievement),
        )
        .route(
            "/api/v1/letters/current/export",
            get(handlers::handle_export),
        )
        .route(
            "/api/v1/letters/versions",
            get(handlers::handle_list_versions),
        )
        .route(
            "/api/v1/letters/versions/:index",
            get(handlers::handle_get_version),
        )
        .route(
            "/api/v1/letters/versions/:index/restore",
            post(handlers::handle_restore_version),
        )
        .with_state(state)
}
