//! HTTP handlers for the skill endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::skill::{DispatchError, RequestEnvelope, SkillDispatcher};
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{ErrorResponse, HealthResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SkillHandlers {
    dispatcher: Arc<SkillDispatcher>,
}

impl SkillHandlers {
    pub fn new(dispatcher: Arc<SkillDispatcher>) -> Self {
        Self { dispatcher }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /skill - Process one voice platform request
pub async fn handle_skill_request(
    State(handlers): State<SkillHandlers>,
    Json(envelope): Json<RequestEnvelope>,
) -> Response {
    match handlers.dispatcher.dispatch(envelope).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => handle_dispatch_error(e),
    }
}

/// GET /health - Liveness probe
pub async fn health() -> Response {
    (StatusCode::OK, Json(HealthResponse::ok())).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_dispatch_error(error: DispatchError) -> Response {
    let domain = DomainError::from(&error);
    let status = match domain.code {
        ErrorCode::InvalidApplicationId => StatusCode::FORBIDDEN,
        ErrorCode::UnknownIntent
        | ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
        ErrorCode::InternalError => {
            tracing::error!(error = %error, "skill request failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("An unexpected error occurred")),
            )
                .into_response();
        }
    };

    tracing::warn!(code = %domain.code, error = %error, "skill request rejected");
    (status, Json(ErrorResponse::from(domain))).into_response()
}
