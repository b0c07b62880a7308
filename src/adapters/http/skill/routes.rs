//! HTTP routes for the skill endpoint.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{handle_skill_request, health, SkillHandlers};

/// Creates the skill router.
pub fn skill_routes(handlers: SkillHandlers) -> Router {
    Router::new()
        .route("/skill", post(handle_skill_request))
        .route("/health", get(health))
        .with_state(handlers)
}
