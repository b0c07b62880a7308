//! HandleTurnHandler - Runs one dialog turn and reports it to analytics.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::dialog::{DialogEngine, DialogError, TurnInput, TurnResult};
use crate::domain::foundation::ConversationId;
use crate::domain::measurement::{SessionAttributes, SlotValue};
use crate::ports::{AnalyticsEvent, AnalyticsTracker};

/// What the user asked for this turn.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnRequest {
    /// The conversation was opened without an intent.
    Launch,
    /// A named intent with its raw slot values.
    Intent {
        name: String,
        slots: HashMap<String, SlotValue>,
    },
}

impl TurnRequest {
    /// Builds an intent request from name/value pairs.
    pub fn intent<'a>(
        name: impl Into<String>,
        slots: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
    ) -> Self {
        Self::Intent {
            name: name.into(),
            slots: slots
                .into_iter()
                .map(|(k, v)| (k.to_string(), SlotValue::from(v.map(str::to_string))))
                .collect(),
        }
    }
}

/// Command to process one turn.
#[derive(Debug, Clone)]
pub struct HandleTurnCommand {
    pub conversation_id: ConversationId,
    /// Attributes threaded back from the previous turn.
    pub attributes: SessionAttributes,
    pub request: TurnRequest,
}

/// Errors that abort a turn.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum HandleTurnError {
    #[error(transparent)]
    Dialog(#[from] DialogError),
}

/// Handler for dialog turns.
pub struct HandleTurnHandler {
    engine: DialogEngine,
    tracker: Arc<dyn AnalyticsTracker>,
}

impl HandleTurnHandler {
    pub fn new(engine: DialogEngine, tracker: Arc<dyn AnalyticsTracker>) -> Self {
        Self { engine, tracker }
    }

    pub async fn handle(&self, cmd: HandleTurnCommand) -> Result<TurnResult, HandleTurnError> {
        // 1. Resolve the turn input
        let input = match &cmd.request {
            TurnRequest::Launch => TurnInput::Welcome,
            TurnRequest::Intent { name, slots } => TurnInput::from_intent(name, slots)?,
        };

        // 2. Advance the dialog
        let result = self.engine.handle(cmd.attributes, &input);

        tracing::info!(
            conversation_id = %cmd.conversation_id,
            event = result.event.label(),
            end_session = result.response.end_session,
            "turn handled"
        );

        // 3. Report, without letting analytics fail the turn
        let event = AnalyticsEvent::for_turn(
            cmd.conversation_id.clone(),
            &result.event,
            &result.response.speech,
        );
        if let Err(err) = self.tracker.track(event).await {
            tracing::warn!(
                conversation_id = %cmd.conversation_id,
                error = %err,
                "failed to report turn analytics"
            );
        }

        Ok(result)
    }
}
