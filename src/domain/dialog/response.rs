//! What a turn produces.

use serde::Serialize;
use serde_json::{json, Value};

use crate::domain::measurement::{Measurement, Outcome, SessionAttributes, Slot};

/// Channel-neutral reply for one turn.
///
/// The skill adapter embeds this into the platform's response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnResponse {
    /// Spoken reply.
    pub speech: String,
    pub card_title: String,
    /// Short summary shown on the card or screen.
    pub card_body: String,
    /// Spoken if the user stays silent.
    pub reprompt: Option<String>,
    pub end_session: bool,
}

impl TurnResponse {
    /// A reply that keeps the conversation open.
    pub fn ask(
        card_title: impl Into<String>,
        speech: impl Into<String>,
        card_body: impl Into<String>,
        reprompt: impl Into<String>,
    ) -> Self {
        Self {
            speech: speech.into(),
            card_title: card_title.into(),
            card_body: card_body.into(),
            reprompt: Some(reprompt.into()),
            end_session: false,
        }
    }

    /// A reply that ends the conversation.
    pub fn tell(
        card_title: impl Into<String>,
        speech: impl Into<String>,
        card_body: impl Into<String>,
    ) -> Self {
        Self {
            speech: speech.into(),
            card_title: card_title.into(),
            card_body: card_body.into(),
            reprompt: None,
            end_session: true,
        }
    }
}

/// Analytics label for a turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurnEvent {
    Welcome,
    Help,
    EndSession,
    /// A measurement turn was rejected.
    InvalidSlot(Slot),
    /// A measurement was accepted and the next question asked.
    ValidateEntries,
    BmrCalculated { bmr: i64 },
    InvalidExerciseLevel,
    DailyIntakeCalculated {
        dci: i64,
        frequency: Option<Measurement>,
    },
}

impl TurnEvent {
    /// Event name reported to analytics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome Message",
            Self::Help => "Help",
            Self::EndSession => "End Session",
            Self::InvalidSlot(Slot::Weight) => "Invalid Weight",
            Self::InvalidSlot(Slot::Age) => "Invalid Age",
            Self::InvalidSlot(Slot::Gender) => "Invalid Gender",
            Self::InvalidSlot(Slot::Height) => "Invalid Height",
            Self::ValidateEntries => "Validate Entries",
            Self::BmrCalculated { .. } => "BMR Calculated",
            Self::InvalidExerciseLevel => "Invalid Exercise Level",
            Self::DailyIntakeCalculated { .. } => "Calculate Daily Intake",
        }
    }

    /// Structured payload sent alongside the label.
    pub fn metadata(&self) -> Option<Value> {
        match self {
            Self::BmrCalculated { bmr } => Some(json!({ "bmr": bmr })),
            Self::DailyIntakeCalculated { dci, frequency } => Some(json!({
                "dci": dci,
                "exerciseFrequency": frequency.map(|f| f.value()),
            })),
            _ => None,
        }
    }
}

/// Everything a turn hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnResult {
    /// Attributes to thread into the next turn.
    pub attributes: SessionAttributes,
    pub response: TurnResponse,
    pub event: TurnEvent,
    /// Set on measurement turns.
    pub outcome: Option<Outcome>,
}
