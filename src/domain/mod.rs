//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `measurement` - Session attributes and the slot accumulator
//! - `metabolism` - BMR and daily caloric intake formulas
//! - `dialog` - Turn inputs, derived state, prompts and the dialog engine

pub mod dialog;
pub mod foundation;
pub mod measurement;
pub mod metabolism;
