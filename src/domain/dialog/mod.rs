//! Dialog domain module.
//!
//! Turn inputs, the derived dialog state, the spoken prompts and the
//! engine that moves a conversation forward one turn at a time.

mod engine;
mod errors;
mod intent;
mod prompts;
mod response;
mod state;

pub use engine::{DialogConfig, DialogEngine};
pub use errors::DialogError;
pub use intent::{names as intent_names, slots as slot_names, ActivityReport, TurnInput};
pub use response::{TurnEvent, TurnResponse, TurnResult};
pub use state::DialogState;
