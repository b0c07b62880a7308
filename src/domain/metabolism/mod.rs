//! Metabolism domain module.
//!
//! Pure formulas: Harris-Benedict BMR and the activity-scaled daily
//! caloric intake.

mod bmr;
mod intake;

pub use bmr::{basal_metabolic_rate, BodyProfile};
pub use intake::{
    activity_multiplier, daily_caloric_intake, per_meal, ActivityLevel, LightExerciseFormula,
    MEALS_PER_DAY,
};
