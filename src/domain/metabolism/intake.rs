//! Daily caloric intake from BMR and exercise frequency.

use serde::{Deserialize, Serialize};

use crate::domain::measurement::Measurement;

/// Meals the per-meal breakdown splits the daily intake across.
pub const MEALS_PER_DAY: i64 = 3;

/// Activity bracket derived from how often the user exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// No exercise at all.
    Sedentary,
    /// Up to two sessions a week.
    Light,
    /// Three to five sessions a week.
    Moderate,
    /// More than five sessions a week.
    VeryActive,
}

impl ActivityLevel {
    /// Brackets a weekly exercise frequency.
    pub fn from_weekly_sessions(sessions: Measurement) -> Self {
        let sessions = sessions.value();
        if sessions > 5.0 {
            Self::VeryActive
        } else if sessions > 2.0 {
            Self::Moderate
        } else {
            Self::Light
        }
    }

    /// Phrase completing "Based on ...".
    pub fn description(&self) -> &'static str {
        match self {
            Self::Sedentary => "having little or no exercise in your routine",
            Self::Light => "a light exercise rate",
            Self::Moderate => "a moderate exercise rate",
            Self::VeryActive => "a very heavy exercise rate",
        }
    }
}

/// Multiplier used for the light bracket.
///
/// The standard Harris-Benedict table uses 1.375; the sedentary variant
/// treats light exercise like none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightExerciseFormula {
    #[default]
    Standard,
    Sedentary,
}

impl LightExerciseFormula {
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Standard => 1.375,
            Self::Sedentary => 1.2,
        }
    }
}

/// Activity multiplier for a bracket.
pub fn activity_multiplier(level: ActivityLevel, light: LightExerciseFormula) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => light.multiplier(),
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::VeryActive => 1.725,
    }
}

/// Daily caloric intake, rounded to the nearest whole calorie.
pub fn daily_caloric_intake(bmr: i64, level: ActivityLevel, light: LightExerciseFormula) -> i64 {
    (bmr as f64 * activity_multiplier(level, light)).round() as i64
}

/// Calories per meal when `dci` is split evenly across the day.
pub fn per_meal(dci: i64) -> i64 {
    (dci as f64 / MEALS_PER_DAY as f64).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sessions(value: f64) -> ActivityLevel {
        ActivityLevel::from_weekly_sessions(Measurement::new(value).unwrap())
    }

    mod brackets {
        use super::*;

        #[test]
        fn two_or_fewer_is_light() {
            assert_eq!(sessions(0.0), ActivityLevel::Light);
            assert_eq!(sessions(1.0), ActivityLevel::Light);
            assert_eq!(sessions(2.0), ActivityLevel::Light);
        }

        #[test]
        fn three_to_five_is_moderate() {
            assert_eq!(sessions(3.0), ActivityLevel::Moderate);
            assert_eq!(sessions(5.0), ActivityLevel::Moderate);
            assert_eq!(sessions(2.5), ActivityLevel::Moderate);
        }

        #[test]
        fn more_than_five_is_very_active() {
            assert_eq!(sessions(6.0), ActivityLevel::VeryActive);
            assert_eq!(sessions(5.5), ActivityLevel::VeryActive);
        }
    }

    mod intake {
        use super::*;

        #[test]
        fn sedentary_uses_1_2() {
            let dci = daily_caloric_intake(1801, ActivityLevel::Sedentary, LightExerciseFormula::Standard);
            assert_eq!(dci, 2161);
        }

        #[test]
        fn moderate_reference_profile() {
            let dci = daily_caloric_intake(1801, ActivityLevel::Moderate, LightExerciseFormula::Standard);
            assert_eq!(dci, 2792);
        }

        #[test]
        fn very_active_uses_1_725() {
            let dci = daily_caloric_intake(1801, ActivityLevel::VeryActive, LightExerciseFormula::Standard);
            assert_eq!(dci, 3107);
        }

        #[test]
        fn light_follows_selected_formula() {
            let standard = daily_caloric_intake(1801, ActivityLevel::Light, LightExerciseFormula::Standard);
            let sedentary = daily_caloric_intake(1801, ActivityLevel::Light, LightExerciseFormula::Sedentary);
            assert_eq!(standard, 2476);
            assert_eq!(sedentary, 2161);
        }

        #[test]
        fn per_meal_splits_in_three() {
            assert_eq!(per_meal(2792), 931);
            assert_eq!(per_meal(3000), 1000);
        }
    }

    #[test]
    fn light_formula_deserializes_lowercase() {
        let f: LightExerciseFormula = serde_json::from_str("\"sedentary\"").unwrap();
        assert_eq!(f, LightExerciseFormula::Sedentary);
        assert_eq!(LightExerciseFormula::default(), LightExerciseFormula::Standard);
    }
}
