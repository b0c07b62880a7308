//! Dialog progression engine.
//!
//! Runs one turn: merge the turn's input into the session attributes, then
//! read the derived state and answer with exactly one prompt or result.

use crate::domain::measurement::{accumulate, SessionAttributes, Slot, SlotFill, SlotReading};
use crate::domain::metabolism::{
    basal_metabolic_rate, daily_caloric_intake, ActivityLevel, BodyProfile, LightExerciseFormula,
};

use super::intent::{ActivityReport, TurnInput};
use super::prompts;
use super::response::{TurnEvent, TurnResult};
use super::state::DialogState;

/// Tunable behavior of the dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogConfig {
    /// Multiplier variant for one or two sessions a week.
    pub light_exercise: LightExerciseFormula,
    /// Whether the final answer also splits the intake across three meals.
    pub meal_breakdown: bool,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            light_exercise: LightExerciseFormula::Standard,
            meal_breakdown: true,
        }
    }
}

/// Stateless turn processor; all conversation state travels in
/// `SessionAttributes`.
#[derive(Debug, Clone, Default)]
pub struct DialogEngine {
    config: DialogConfig,
}

impl DialogEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: DialogConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    /// Processes one turn.
    pub fn handle(&self, attributes: SessionAttributes, input: &TurnInput) -> TurnResult {
        let attributes = Self::reconcile(attributes);
        match input {
            TurnInput::Welcome => TurnResult {
                attributes: SessionAttributes::new(),
                response: prompts::welcome(),
                event: TurnEvent::Welcome,
                outcome: None,
            },
            TurnInput::Help => TurnResult {
                attributes,
                response: prompts::help(),
                event: TurnEvent::Help,
                outcome: None,
            },
            TurnInput::End => TurnResult {
                attributes: SessionAttributes::new(),
                response: prompts::goodbye(),
                event: TurnEvent::EndSession,
                outcome: None,
            },
            TurnInput::Fill(fill) => self.fill(attributes, fill),
            TurnInput::Activity(report) => self.report_activity(attributes, report),
        }
    }

    /// Restores the attribute invariants on caller-supplied state.
    ///
    /// A complete profile without a stored BMR gets one computed here, so
    /// turns that keep the attributes (help, rejections) never hand back a
    /// full profile missing its BMR.
    fn reconcile(attributes: SessionAttributes) -> SessionAttributes {
        let mut attributes = attributes.reconciled();
        if attributes.bmr.is_none() {
            attributes.bmr =
                BodyProfile::from_attributes(&attributes).map(|p| basal_metabolic_rate(&p));
        }
        attributes
    }

    /// Merges one measurement and moves the dialog on.
    ///
    /// Rejected values are answered with a slot-specific re-prompt and
    /// leave the attributes as they were.
    pub fn fill(&self, attributes: SessionAttributes, fill: &SlotFill) -> TurnResult {
        let slot = fill.slot();
        let (attributes, outcome) = accumulate(attributes, fill);
        if !outcome.is_accepted() {
            return TurnResult {
                attributes,
                response: prompts::rejection(slot, outcome),
                event: TurnEvent::InvalidSlot(slot),
                outcome: Some(outcome),
            };
        }
        TurnResult {
            outcome: Some(outcome),
            ..self.progress(attributes)
        }
    }

    /// Answers with the first row of the progression table that matches.
    pub fn progress(&self, mut attributes: SessionAttributes) -> TurnResult {
        match DialogState::derive(&attributes) {
            DialogState::ReadyForBmr => match BodyProfile::from_attributes(&attributes) {
                Some(profile) => {
                    let bmr = basal_metabolic_rate(&profile);
                    attributes.bmr = Some(bmr);
                    attributes.dci = None;
                    TurnResult {
                        attributes,
                        response: prompts::bmr_summary(&profile, bmr),
                        event: TurnEvent::BmrCalculated { bmr },
                        outcome: None,
                    }
                }
                // derive() only yields ReadyForBmr with a complete profile
                None => self.ask_for(attributes, DialogState::NeedWeight),
            },
            DialogState::ReadyForActivity => {
                let bmr = attributes.bmr.unwrap_or_default();
                TurnResult {
                    attributes,
                    response: prompts::exercise_question(bmr),
                    event: TurnEvent::ValidateEntries,
                    outcome: None,
                }
            }
            need => self.ask_for(attributes, need),
        }
    }

    fn ask_for(&self, attributes: SessionAttributes, state: DialogState) -> TurnResult {
        let slot = state.missing_slot().unwrap_or(Slot::Weight);
        TurnResult {
            attributes,
            response: prompts::question(slot),
            event: TurnEvent::ValidateEntries,
            outcome: None,
        }
    }

    /// Turns exercise habits into a daily intake once BMR is known.
    ///
    /// Without a BMR the progression table answers instead.
    pub fn report_activity(
        &self,
        mut attributes: SessionAttributes,
        report: &ActivityReport,
    ) -> TurnResult {
        let Some(bmr) = attributes.bmr else {
            return self.progress(attributes);
        };

        let (level, frequency) = if report.has_exercise {
            match report.frequency.reading() {
                SlotReading::Value(frequency) => {
                    (ActivityLevel::from_weekly_sessions(frequency), Some(frequency))
                }
                SlotReading::Missing | SlotReading::Ambiguous => {
                    return TurnResult {
                        attributes,
                        response: prompts::missing_frequency(),
                        event: TurnEvent::InvalidExerciseLevel,
                        outcome: None,
                    };
                }
            }
        } else {
            (ActivityLevel::Sedentary, None)
        };

        let dci = daily_caloric_intake(bmr, level, self.config.light_exercise);
        attributes.dci = Some(dci);
        TurnResult {
            attributes,
            response: prompts::intake_summary(level, dci, self.config.meal_breakdown),
            event: TurnEvent::DailyIntakeCalculated { dci, frequency },
            outcome: None,
        }
    }
}
