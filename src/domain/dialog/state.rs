//! Derived dialog state.
//!
//! There is no stored state tag. The step a conversation is at is read off
//! which session attributes are populated, every turn, so corrections need
//! no special handling.

use serde::{Deserialize, Serialize};

use crate::domain::measurement::{SessionAttributes, Slot};

/// The step a conversation is at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogState {
    NeedWeight,
    NeedAge,
    NeedGender,
    NeedHeight,
    /// All four measurements are known but no BMR has been computed.
    ReadyForBmr,
    /// BMR is known; waiting for exercise habits.
    ReadyForActivity,
}

impl DialogState {
    /// Reads the state off `attributes`, checking rows top to bottom.
    pub fn derive(attributes: &SessionAttributes) -> Self {
        if let Some(slot) = Slot::PRIORITY
            .into_iter()
            .find(|slot| !slot.is_filled(attributes))
        {
            return Self::needing(slot);
        }
        if attributes.bmr.is_some() {
            Self::ReadyForActivity
        } else {
            Self::ReadyForBmr
        }
    }

    fn needing(slot: Slot) -> Self {
        match slot {
            Slot::Weight => Self::NeedWeight,
            Slot::Age => Self::NeedAge,
            Slot::Gender => Self::NeedGender,
            Slot::Height => Self::NeedHeight,
        }
    }

    /// The slot still to be collected, if any.
    pub fn missing_slot(&self) -> Option<Slot> {
        match self {
            Self::NeedWeight => Some(Slot::Weight),
            Self::NeedAge => Some(Slot::Age),
            Self::NeedGender => Some(Slot::Gender),
            Self::NeedHeight => Some(Slot::Height),
            Self::ReadyForBmr | Self::ReadyForActivity => None,
        }
    }
}

impl Default for DialogState {
    fn default() -> Self {
        Self::NeedWeight
    }
}
