//! Basal metabolic rate (Harris-Benedict, imperial units).

use crate::domain::measurement::{Gender, Measurement, SessionAttributes};

/// Inches per foot.
const INCHES_PER_FOOT: f64 = 12.0;

/// Everything the BMR formula needs, with inches optional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyProfile {
    pub weight_lb: Measurement,
    pub age_years: Measurement,
    pub gender: Gender,
    pub height_feet: Measurement,
    pub height_inches: Option<Measurement>,
}

impl BodyProfile {
    /// Builds a profile once all four measurements are present.
    pub fn from_attributes(attributes: &SessionAttributes) -> Option<Self> {
        Some(Self {
            weight_lb: attributes.weight?,
            age_years: attributes.age?,
            gender: attributes.gender?,
            height_feet: attributes.height_feet?,
            height_inches: attributes.height_inches,
        })
    }

    /// Total height in inches.
    pub fn height_in_inches(&self) -> f64 {
        self.height_feet.value() * INCHES_PER_FOOT
            + self.height_inches.map_or(0.0, |inches| inches.value())
    }
}

/// Per-gender coefficients of the Harris-Benedict equation.
struct Coefficients {
    base: f64,
    per_pound: f64,
    per_inch: f64,
    per_year: f64,
}

impl Coefficients {
    fn for_gender(gender: Gender) -> Self {
        match gender {
            Gender::Male => Self {
                base: 66.0,
                per_pound: 6.2,
                per_inch: 12.7,
                per_year: 6.76,
            },
            Gender::Female => Self {
                base: 655.1,
                per_pound: 4.35,
                per_inch: 4.7,
                per_year: 4.7,
            },
        }
    }
}

/// Computes the BMR, rounded to the nearest whole calorie.
///
/// Inputs are bounded by `MAX_MEASUREMENT`, so the rounded value always
/// fits an `i64`.
pub fn basal_metabolic_rate(profile: &BodyProfile) -> i64 {
    let c = Coefficients::for_gender(profile.gender);
    let bmr = c.base + c.per_pound * profile.weight_lb.value()
        + c.per_inch * profile.height_in_inches()
        - c.per_year * profile.age_years.value();
    bmr.round() as i64
}
