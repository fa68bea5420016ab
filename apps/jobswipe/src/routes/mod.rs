pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/options", get(handlers::handle_options))
        // Session API
        .route("/api/v1/session", get(handlers::handle_get_session))
        .route("/api/v1/session/start", post(handlers::handle_start))
        .route(
            "/api/v1/session/profile",
            put(handlers::handle_update_profile),
        )
        .route(
            "/api/v1/session/resume",
            post(handlers::handle_upload_resume),
        )
        .route("/api/v1/session/signup", post(handlers::handle_signup))
        .route("/api/v1/session/swipe", post(handlers::handle_swipe))
        .route("/api/v1/session/drag", post(handlers::handle_drag))
        .route(
            "/api/v1/session/dashboard",
            post(handlers::handle_open_dashboard),
        )
        .route("/api/v1/session/jobs", post(handlers::handle_back_to_jobs))
        // Dashboard API
        .route("/api/v1/dashboard", get(handlers::handle_dashboard))
        .with_state(state)
}
