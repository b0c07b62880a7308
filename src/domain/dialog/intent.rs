//! Turn input and the intent catalog of the interaction model.

use std::collections::HashMap;

use crate::domain::measurement::{Gender, SlotFill, SlotValue};

use super::errors::DialogError;

/// Intent names as declared in the interaction model.
pub mod names {
    pub const WELCOME: &str = "GetWelcomeResponse";
    pub const WEIGHT_ENTRY: &str = "weightEntry";
    pub const AGE_ENTRY: &str = "ageEntry";
    pub const HEIGHT_ENTRY: &str = "heightEntry";
    pub const GENDER_MALE: &str = "genderMale";
    pub const GENDER_FEMALE: &str = "genderFemale";
    pub const NO_EXERCISE: &str = "noExercise";
    pub const ACTIVITY_LEVEL: &str = "activityLevel";
    pub const START_OVER: &str = "AMAZON.StartOverIntent";
    pub const HELP: &str = "AMAZON.HelpIntent";
    pub const REPEAT: &str = "AMAZON.RepeatIntent";
    pub const NEXT: &str = "AMAZON.NextIntent";
    pub const STOP: &str = "AMAZON.StopIntent";
    pub const CANCEL: &str = "AMAZON.CancelIntent";
    pub const NO: &str = "AMAZON.NoIntent";
}

/// Slot names as declared in the interaction model.
pub mod slots {
    pub const WEIGHT: &str = "weight";
    pub const AGE: &str = "age";
    pub const HEIGHT_FEET: &str = "heightFeet";
    pub const HEIGHT_INCHES: &str = "heightInches";
    pub const EXERCISE_FREQUENCY: &str = "exerciseFrequency";
}

/// Self-reported exercise habits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityReport {
    pub has_exercise: bool,
    /// Sessions per week; only read when `has_exercise` is true.
    pub frequency: SlotValue,
}

impl ActivityReport {
    /// The user does not exercise.
    pub fn none() -> Self {
        Self {
            has_exercise: false,
            frequency: SlotValue::missing(),
        }
    }

    /// The user exercises, `frequency` times a week.
    pub fn exercises(frequency: impl Into<SlotValue>) -> Self {
        Self {
            has_exercise: true,
            frequency: frequency.into(),
        }
    }
}

/// What one turn asks the dialog to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnInput {
    /// Launch, start over, repeat: greet and reset.
    Welcome,
    /// Supply one measurement.
    Fill(SlotFill),
    /// Report exercise habits.
    Activity(ActivityReport),
    Help,
    /// Stop, cancel, no: say goodbye and end.
    End,
}

impl TurnInput {
    /// Maps an intent and its slot values onto a turn input.
    ///
    /// Absent slots read as missing.
    ///
    /// # Errors
    ///
    /// Returns `DialogError::UnknownIntent` for names outside the catalog.
    pub fn from_intent(
        name: &str,
        slot_values: &HashMap<String, SlotValue>,
    ) -> Result<Self, DialogError> {
        let slot = |key: &str| slot_values.get(key).cloned().unwrap_or_default();

        let input = match name {
            names::WELCOME | names::START_OVER | names::REPEAT | names::NEXT => Self::Welcome,
            names::WEIGHT_ENTRY => Self::Fill(SlotFill::Weight(slot(slots::WEIGHT))),
            names::AGE_ENTRY => Self::Fill(SlotFill::Age(slot(slots::AGE))),
            names::HEIGHT_ENTRY => Self::Fill(SlotFill::Height {
                feet: slot(slots::HEIGHT_FEET),
                inches: slot(slots::HEIGHT_INCHES),
            }),
            names::GENDER_MALE => Self::Fill(SlotFill::Gender(Gender::Male)),
            names::GENDER_FEMALE => Self::Fill(SlotFill::Gender(Gender::Female)),
            names::NO_EXERCISE => Self::Activity(ActivityReport::none()),
            names::ACTIVITY_LEVEL => {
                Self::Activity(ActivityReport::exercises(slot(slots::EXERCISE_FREQUENCY)))
            }
            names::HELP => Self::Help,
            names::STOP | names::CANCEL | names::NO => Self::End,
            other => return Err(DialogError::UnknownIntent(other.to_string())),
        };
        Ok(input)
    }
}
