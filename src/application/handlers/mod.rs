//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod dialog;

pub use dialog::{HandleTurnCommand, HandleTurnError, HandleTurnHandler, TurnRequest};
