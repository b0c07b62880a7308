//! Measurement value objects.
//!
//! Slot values arrive from the voice platform as optional raw strings.
//! `SlotValue` wraps the raw string and classifies it into a `SlotReading`;
//! only a `SlotReading::Value` ever reaches `SessionAttributes`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Placeholder the platform puts in a slot it could not resolve.
pub const AMBIGUOUS_MARKER: &str = "?";

/// Largest magnitude a measurement may have. Keeps every derived calorie
/// figure exactly representable as an integer.
pub const MAX_MEASUREMENT: f64 = 1e12;

/// A plain decimal quantity supplied by the user (pounds, years, feet, inches).
///
/// No plausibility checks: zero and negative values are accepted as-is.
/// Only magnitudes beyond `MAX_MEASUREMENT` are refused.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Measurement(f64);

impl Measurement {
    /// Creates a measurement from a finite number within `MAX_MEASUREMENT`.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                "measurement",
                "value must be a finite number",
            ));
        }
        if value.abs() > MAX_MEASUREMENT {
            return Err(ValidationError::invalid_format(
                "measurement",
                format!("magnitude exceeds {:.0}", MAX_MEASUREMENT),
            ));
        }
        Ok(Self(value))
    }

    /// Parses a plain decimal number such as `180`, `5.5` or `-3`.
    ///
    /// Exponents, `inf` and `NaN` are rejected even though `f64::from_str`
    /// would accept them.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("measurement"));
        }
        let digits = trimmed
            .strip_prefix(|c: char| c == '-' || c == '+')
            .unwrap_or(trimmed);
        let plain = !digits.is_empty()
            && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
            && digits.chars().filter(|c| *c == '.').count() <= 1
            && digits.chars().any(|c| c.is_ascii_digit());
        if !plain {
            return Err(ValidationError::invalid_format(
                "measurement",
                format!("'{}' is not a plain decimal number", trimmed),
            ));
        }
        trimmed
            .parse::<f64>()
            .map_err(|e| ValidationError::invalid_format("measurement", e.to_string()))
            .and_then(Self::new)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl FromStr for Measurement {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Measurement {
    /// Whole numbers are spoken without a trailing `.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for Measurement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Measurement {
    /// Accepts a JSON number or a numeric string; earlier sessions stored
    /// the raw slot text.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Measurement::new(n).map_err(serde::de::Error::custom),
            Raw::Text(s) => Measurement::parse(&s).map_err(serde::de::Error::custom),
        }
    }
}

/// Gender, chosen through one of two dedicated intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Lowercase form used inside spoken sentences.
    pub fn spoken(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

/// Classification of one raw slot value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotReading {
    /// The slot was absent or empty.
    Missing,
    /// The slot held the ambiguous marker or text that is not a number.
    Ambiguous,
    /// A usable number.
    Value(Measurement),
}

/// Raw, possibly-missing slot text as delivered by upstream slot extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotValue(Option<String>);

impl SlotValue {
    /// A slot that carried no value.
    pub fn missing() -> Self {
        Self(None)
    }

    /// A slot carrying raw text.
    pub fn raw(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    /// Returns the raw text, if any.
    pub fn as_raw(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Classifies the raw text.
    pub fn reading(&self) -> SlotReading {
        match self.0.as_deref().map(str::trim) {
            None | Some("") => SlotReading::Missing,
            Some(AMBIGUOUS_MARKER) => SlotReading::Ambiguous,
            Some(text) => match Measurement::parse(text) {
                Ok(value) => SlotReading::Value(value),
                Err(_) => SlotReading::Ambiguous,
            },
        }
    }
}

impl From<Option<String>> for SlotValue {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

impl From<&str> for SlotValue {
    fn from(value: &str) -> Self {
        Self::raw(value)
    }
}
