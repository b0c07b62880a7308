//! Dialog behavior configuration

use serde::Deserialize;

use crate::domain::dialog::DialogConfig;
use crate::domain::metabolism::LightExerciseFormula;

/// Dialog behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DialogSettings {
    /// Multiplier used for light exercise (`standard` or `sedentary`)
    #[serde(default)]
    pub light_exercise_formula: LightExerciseFormula,

    /// Whether the final answer includes the per-meal split
    #[serde(default = "default_meal_breakdown")]
    pub meal_breakdown: bool,
}

impl DialogSettings {
    /// Engine configuration for these settings.
    pub fn engine_config(&self) -> DialogConfig {
        DialogConfig {
            light_exercise: self.light_exercise_formula,
            meal_breakdown: self.meal_breakdown,
        }
    }
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            light_exercise_formula: LightExerciseFormula::default(),
            meal_breakdown: default_meal_breakdown(),
        }
    }
}

fn default_meal_breakdown() -> bool {
    true
}
