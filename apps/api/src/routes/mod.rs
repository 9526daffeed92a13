pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session + document API: one in-memory document per session,
        // edited through reducer-style commands.
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_document).delete(handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/edits",
            post(handlers::handle_apply_edit),
        )
        .route(
            "/api/v1/sessions/:id/preview",
            get(handlers::handle_preview),
        )
        .with_state(state)
}
