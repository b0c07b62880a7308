//! AnalyticsTracker port - Interface for reporting conversation analytics.
//!
//! Each processed turn produces one event. Tracking sits outside the dialog
//! core: the turn result is computed first and a failed `track` call never
//! changes it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::dialog::TurnEvent;
use crate::domain::foundation::{ConversationId, EventId, Timestamp};

/// One reported turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub id: EventId,
    /// Conversation the turn belongs to.
    pub conversation_id: ConversationId,
    /// Label such as "BMR Calculated" or "Invalid Weight".
    pub name: String,
    /// Computed values worth reporting, if any.
    pub metadata: Option<Value>,
    /// What the user heard.
    pub speech: String,
    pub occurred_at: Timestamp,
}

impl AnalyticsEvent {
    /// Creates a new analytics event.
    pub fn new(
        conversation_id: ConversationId,
        name: impl Into<String>,
        metadata: Option<Value>,
        speech: impl Into<String>,
    ) -> Self {
        Self {
            id: EventId::new(),
            conversation_id,
            name: name.into(),
            metadata,
            speech: speech.into(),
            occurred_at: Timestamp::now(),
        }
    }

    /// Creates the event describing a processed turn.
    pub fn for_turn(conversation_id: ConversationId, event: &TurnEvent, speech: &str) -> Self {
        Self::new(conversation_id, event.label(), event.metadata(), speech)
    }
}

/// Errors from analytics tracking.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalyticsError {
    #[error("Analytics transport error: {0}")]
    Transport(String),

    #[error("Analytics collector rejected event with status {0}")]
    Rejected(u16),
}

/// Port for reporting turn analytics.
#[async_trait]
pub trait AnalyticsTracker: Send + Sync {
    /// Reports one event.
    async fn track(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError>;
}
