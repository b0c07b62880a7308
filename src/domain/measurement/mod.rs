//! Measurement domain module.
//!
//! Holds the per-conversation session attributes and the accumulator that
//! merges one slot fill at a time into them.

mod accumulator;
mod attributes;
mod values;

pub use accumulator::{accumulate, Outcome, Slot, SlotFill};
pub use attributes::SessionAttributes;
pub use values::{
    Gender, Measurement, SlotReading, SlotValue, AMBIGUOUS_MARKER, MAX_MEASUREMENT,
};
