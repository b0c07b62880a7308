//! Session attributes - the state of one conversation.
//!
//! The caller owns this value and hands it back on every turn. Field names
//! on the wire are camelCase to match what the voice platform round-trips.

use serde::{Deserialize, Serialize};

use super::values::{Gender, Measurement};

/// Accumulated measurements plus the values derived from them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAttributes {
    /// Body weight in pounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Measurement>,

    /// Age in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Measurement>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_feet: Option<Measurement>,

    /// Only meaningful together with `height_feet`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_inches: Option<Measurement>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    /// Basal metabolic rate, rounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmr: Option<i64>,

    /// Daily caloric intake, rounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dci: Option<i64>,
}

impl SessionAttributes {
    /// Creates empty attributes for a new conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns true once weight, age, gender and feet are all known.
    pub fn has_all_measurements(&self) -> bool {
        self.weight.is_some()
            && self.age.is_some()
            && self.gender.is_some()
            && self.height_feet.is_some()
    }

    /// Drops derived values after a measurement changed.
    pub fn invalidate_derived(&mut self) {
        self.bmr = None;
        self.dci = None;
    }

    /// Restores the field invariants on attributes received from the caller.
    ///
    /// A stored BMR without its inputs and inches without feet are dropped.
    pub fn reconciled(mut self) -> Self {
        if self.height_feet.is_none() {
            self.height_inches = None;
        }
        if !self.has_all_measurements() {
            self.invalidate_derived();
        }
        if self.bmr.is_none() {
            self.dci = None;
        }
        self
    }
}
