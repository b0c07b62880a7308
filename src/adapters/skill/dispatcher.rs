//! SkillDispatcher - Routes voice platform requests to the turn handler.

use crate::application::{HandleTurnCommand, HandleTurnError, HandleTurnHandler, TurnRequest};
use crate::config::DisplayConfig;
use crate::domain::dialog::DialogError;
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode, ValidationError};

use super::request::{RequestEnvelope, SkillRequest};
use super::response::ResponseEnvelope;

/// Errors that reject a request before or during its turn.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum DispatchError {
    #[error("Request application id '{actual}' does not match this skill")]
    InvalidApplicationId { actual: String },

    #[error("Invalid session: {0}")]
    InvalidSession(#[from] ValidationError),

    #[error("Unsupported request type")]
    UnsupportedRequest,

    #[error(transparent)]
    Turn(#[from] HandleTurnError),
}

impl From<&DispatchError> for DomainError {
    fn from(err: &DispatchError) -> Self {
        match err {
            DispatchError::InvalidApplicationId { actual } => {
                DomainError::new(ErrorCode::InvalidApplicationId, err.to_string())
                    .with_detail("application_id", actual)
            }
            DispatchError::InvalidSession(inner) => DomainError::from(inner.clone()),
            DispatchError::UnsupportedRequest => {
                DomainError::new(ErrorCode::ValidationFailed, err.to_string())
            }
            DispatchError::Turn(HandleTurnError::Dialog(DialogError::UnknownIntent(name))) => {
                DomainError::new(ErrorCode::UnknownIntent, err.to_string())
                    .with_detail("intent", name)
            }
        }
    }
}

/// Entry point for every request the voice platform sends.
pub struct SkillDispatcher {
    handler: HandleTurnHandler,
    application_id: Option<String>,
    display: DisplayConfig,
}

impl SkillDispatcher {
    pub fn new(handler: HandleTurnHandler, display: DisplayConfig) -> Self {
        Self {
            handler,
            application_id: None,
            display,
        }
    }

    /// Only accept requests carrying this application id.
    pub fn with_application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = Some(application_id.into());
        self
    }

    pub async fn dispatch(
        &self,
        envelope: RequestEnvelope,
    ) -> Result<ResponseEnvelope, DispatchError> {
        // 1. Verify the caller
        let actual = &envelope.session.application.application_id;
        if let Some(expected) = &self.application_id {
            if expected != actual {
                tracing::warn!(application_id = %actual, "rejected request for another skill");
                return Err(DispatchError::InvalidApplicationId {
                    actual: actual.clone(),
                });
            }
        }

        let conversation_id = ConversationId::new(envelope.session.session_id.clone())?;
        if envelope.session.new {
            tracing::info!(conversation_id = %conversation_id, "session started");
        }

        // 2. Map the platform request onto a turn
        let device = envelope.device_kind();
        let request = match envelope.request {
            SkillRequest::LaunchRequest { request_id } => {
                tracing::debug!(%request_id, "launch request");
                TurnRequest::Launch
            }
            SkillRequest::IntentRequest { request_id, intent } => {
                tracing::debug!(%request_id, intent = %intent.name, "intent request");
                TurnRequest::Intent {
                    slots: intent.slot_values(),
                    name: intent.name,
                }
            }
            SkillRequest::SessionEndedRequest { request_id, reason } => {
                tracing::info!(
                    conversation_id = %conversation_id,
                    %request_id,
                    reason = reason.as_deref().unwrap_or("unspecified"),
                    "session ended"
                );
                return Ok(ResponseEnvelope::empty());
            }
            SkillRequest::Unsupported => return Err(DispatchError::UnsupportedRequest),
        };

        // 3. Run the turn and wrap it for the device
        let result = self
            .handler
            .handle(HandleTurnCommand {
                conversation_id,
                attributes: envelope.session.attributes.unwrap_or_default(),
                request,
            })
            .await?;

        Ok(ResponseEnvelope::for_turn(
            result.attributes,
            &result.response,
            device,
            &self.display,
        ))
    }
}
