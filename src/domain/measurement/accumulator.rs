//! Measurement accumulator.
//!
//! Merges one observed slot fill into the session attributes. Every slot
//! goes through the same path: read the slot, reject missing or ambiguous
//! readings without touching state, otherwise write and invalidate the
//! derived values.

use serde::{Deserialize, Serialize};

use super::attributes::SessionAttributes;
use super::values::{Gender, Measurement, SlotReading, SlotValue};

/// The measurement a turn is trying to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Weight,
    Age,
    Gender,
    Height,
}

impl Slot {
    /// Collection order; the first missing slot is asked for next.
    pub const PRIORITY: [Slot; 4] = [Slot::Weight, Slot::Age, Slot::Gender, Slot::Height];

    /// Human-readable name used in log lines and card text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Height => "height",
        }
    }

    /// Returns true if `attributes` already holds this slot.
    pub fn is_filled(&self, attributes: &SessionAttributes) -> bool {
        match self {
            Self::Weight => attributes.weight.is_some(),
            Self::Age => attributes.age.is_some(),
            Self::Gender => attributes.gender.is_some(),
            Self::Height => attributes.height_feet.is_some(),
        }
    }
}

/// One observed value for one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotFill {
    Weight(SlotValue),
    Age(SlotValue),
    Height { feet: SlotValue, inches: SlotValue },
    Gender(Gender),
}

impl SlotFill {
    /// The slot this fill targets.
    pub fn slot(&self) -> Slot {
        match self {
            Self::Weight(_) => Slot::Weight,
            Self::Age(_) => Slot::Age,
            Self::Height { .. } => Slot::Height,
            Self::Gender(_) => Slot::Gender,
        }
    }
}

/// How a fill was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The value was written.
    Accepted,
    /// The slot carried the ambiguous marker; nothing was written.
    AmbiguousValue,
    /// The slot carried nothing; nothing was written.
    MissingValue,
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Merges `fill` into `current`.
///
/// Rejections return `current` unchanged. For height, feet decides the
/// outcome; inches is taken only when it reads as a number, and an accepted
/// height turn replaces any earlier inches.
pub fn accumulate(current: SessionAttributes, fill: &SlotFill) -> (SessionAttributes, Outcome) {
    let primary = match fill {
        SlotFill::Weight(value) | SlotFill::Age(value) => value.reading(),
        SlotFill::Height { feet, .. } => feet.reading(),
        SlotFill::Gender(gender) => {
            let mut next = current;
            next.gender = Some(*gender);
            next.invalidate_derived();
            return (next, Outcome::Accepted);
        }
    };

    match primary {
        SlotReading::Missing => (current, Outcome::MissingValue),
        SlotReading::Ambiguous => (current, Outcome::AmbiguousValue),
        SlotReading::Value(value) => (write(current, fill, value), Outcome::Accepted),
    }
}

fn write(
    mut attributes: SessionAttributes,
    fill: &SlotFill,
    value: Measurement,
) -> SessionAttributes {
    match fill {
        SlotFill::Weight(_) => attributes.weight = Some(value),
        SlotFill::Age(_) => attributes.age = Some(value),
        SlotFill::Height { inches, .. } => {
            attributes.height_feet = Some(value);
            attributes.height_inches = match inches.reading() {
                SlotReading::Value(inches) => Some(inches),
                SlotReading::Missing | SlotReading::Ambiguous => None,
            };
        }
        SlotFill::Gender(gender) => attributes.gender = Some(*gender),
    }
    attributes.invalidate_derived();
    attributes
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn m(value: f64) -> Option<Measurement> {
        Some(Measurement::new(value).unwrap())
    }

    fn with_bmr() -> SessionAttributes {
        SessionAttributes {
            weight: m(180.0),
            age: m(40.0),
            height_feet: m(5.0),
            height_inches: m(10.0),
            gender: Some(Gender::Male),
            bmr: Some(1801),
            dci: None,
        }
    }

    mod scalar_slots {
        use super::*;

        #[test]
        fn accepts_weight_into_empty_attributes() {
            let (attrs, outcome) =
                accumulate(SessionAttributes::new(), &SlotFill::Weight("150".into()));
            assert_eq!(outcome, Outcome::Accepted);
            assert_eq!(
                attrs,
                SessionAttributes {
                    weight: m(150.0),
                    ..Default::default()
                }
            );
        }

        #[test]
        fn accepts_age() {
            let (attrs, outcome) =
                accumulate(SessionAttributes::new(), &SlotFill::Age("40".into()));
            assert!(outcome.is_accepted());
            assert_eq!(attrs.age, m(40.0));
        }

        #[test]
        fn missing_weight_leaves_state_untouched() {
            let before = SessionAttributes {
                age: m(30.0),
                ..Default::default()
            };
            let (attrs, outcome) =
                accumulate(before.clone(), &SlotFill::Weight(SlotValue::missing()));
            assert_eq!(outcome, Outcome::MissingValue);
            assert_eq!(attrs, before);
        }

        #[test]
        fn ambiguous_age_leaves_state_untouched() {
            let (attrs, outcome) = accumulate(with_bmr(), &SlotFill::Age("?".into()));
            assert_eq!(outcome, Outcome::AmbiguousValue);
            assert_eq!(attrs, with_bmr());
        }

        #[test]
        fn negative_values_are_accepted() {
            let (attrs, outcome) =
                accumulate(SessionAttributes::new(), &SlotFill::Weight("-5".into()));
            assert!(outcome.is_accepted());
            assert_eq!(attrs.weight, m(-5.0));
        }

        #[test]
        fn accepted_correction_invalidates_bmr() {
            let (attrs, outcome) = accumulate(with_bmr(), &SlotFill::Weight("200".into()));
            assert!(outcome.is_accepted());
            assert_eq!(attrs.weight, m(200.0));
            assert_eq!(attrs.bmr, None);
            assert_eq!(attrs.age, m(40.0));
        }
    }

    mod height {
        use super::*;

        #[test]
        fn ambiguous_feet_rejects_turn() {
            let fill = SlotFill::Height {
                feet: "?".into(),
                inches: "10".into(),
            };
            let (attrs, outcome) = accumulate(SessionAttributes::new(), &fill);
            assert_eq!(outcome, Outcome::AmbiguousValue);
            assert!(attrs.is_empty());
        }

        #[test]
        fn missing_feet_rejects_turn() {
            let fill = SlotFill::Height {
                feet: SlotValue::missing(),
                inches: "10".into(),
            };
            let (_, outcome) = accumulate(SessionAttributes::new(), &fill);
            assert_eq!(outcome, Outcome::MissingValue);
        }

        #[test]
        fn feet_and_inches_are_written() {
            let fill = SlotFill::Height {
                feet: "5".into(),
                inches: "10".into(),
            };
            let (attrs, outcome) = accumulate(SessionAttributes::new(), &fill);
            assert!(outcome.is_accepted());
            assert_eq!(attrs.height_feet, m(5.0));
            assert_eq!(attrs.height_inches, m(10.0));
        }

        #[test]
        fn ambiguous_inches_still_accepts_feet() {
            let fill = SlotFill::Height {
                feet: "6".into(),
                inches: "?".into(),
            };
            let (attrs, outcome) = accumulate(SessionAttributes::new(), &fill);
            assert!(outcome.is_accepted());
            assert_eq!(attrs.height_feet, m(6.0));
            assert_eq!(attrs.height_inches, None);
        }

        #[test]
        fn new_height_without_inches_clears_old_inches() {
            let fill = SlotFill::Height {
                feet: "6".into(),
                inches: SlotValue::missing(),
            };
            let (attrs, _) = accumulate(with_bmr(), &fill);
            assert_eq!(attrs.height_feet, m(6.0));
            assert_eq!(attrs.height_inches, None);
        }
    }

    mod gender {
        use super::*;

        #[test]
        fn gender_is_always_accepted() {
            let (attrs, outcome) =
                accumulate(SessionAttributes::new(), &SlotFill::Gender(Gender::Female));
            assert_eq!(outcome, Outcome::Accepted);
            assert_eq!(attrs.gender, Some(Gender::Female));
        }

        #[test]
        fn changing_gender_invalidates_bmr() {
            let (attrs, _) = accumulate(with_bmr(), &SlotFill::Gender(Gender::Female));
            assert_eq!(attrs.bmr, None);
        }
    }

    mod slot {
        use super::*;

        #[test]
        fn fill_reports_its_slot() {
            assert_eq!(SlotFill::Weight("1".into()).slot(), Slot::Weight);
            assert_eq!(SlotFill::Gender(Gender::Male).slot(), Slot::Gender);
            let height = SlotFill::Height {
                feet: "5".into(),
                inches: SlotValue::missing(),
            };
            assert_eq!(height.slot(), Slot::Height);
        }

        #[test]
        fn height_is_filled_by_feet_alone() {
            let attrs = SessionAttributes {
                height_feet: m(5.0),
                ..Default::default()
            };
            assert!(Slot::Height.is_filled(&attrs));
            assert!(!Slot::Weight.is_filled(&attrs));
        }
    }

    fn arb_raw() -> impl Strategy<Value = SlotValue> {
        prop_oneof![
            Just(SlotValue::missing()),
            Just(SlotValue::raw("?")),
            Just(SlotValue::raw("")),
            "[a-z ]{1,8}".prop_map(SlotValue::raw),
            (-500.0f64..500.0).prop_map(|v| SlotValue::raw(format!("{v:.1}"))),
        ]
    }

    fn arb_fill() -> impl Strategy<Value = SlotFill> {
        prop_oneof![
            arb_raw().prop_map(SlotFill::Weight),
            arb_raw().prop_map(SlotFill::Age),
            (arb_raw(), arb_raw()).prop_map(|(feet, inches)| SlotFill::Height { feet, inches }),
            prop_oneof![Just(Gender::Male), Just(Gender::Female)].prop_map(SlotFill::Gender),
        ]
    }

    proptest! {
        #[test]
        fn rejected_fills_never_mutate_state(fill in arb_fill()) {
            let (attrs, outcome) = accumulate(with_bmr(), &fill);
            if !outcome.is_accepted() {
                prop_assert_eq!(attrs, with_bmr());
            }
        }

        #[test]
        fn accepted_fills_leave_no_derived_values(fill in arb_fill()) {
            let (attrs, outcome) = accumulate(with_bmr(), &fill);
            if outcome.is_accepted() {
                prop_assert_eq!(attrs.bmr, None);
                prop_assert_eq!(attrs.dci, None);
            }
        }

        #[test]
        fn inches_never_without_feet(fills in proptest::collection::vec(arb_fill(), 0..8)) {
            let mut attrs = SessionAttributes::new();
            for fill in &fills {
                attrs = accumulate(attrs, fill).0;
                prop_assert!(attrs.height_inches.is_none() || attrs.height_feet.is_some());
            }
        }
    }
}
