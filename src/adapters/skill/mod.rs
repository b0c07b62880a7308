//! Voice Skill Adapter.
//!
//! Translates the voice platform's JSON envelopes to and from dialog turns.

mod dispatcher;
mod request;
mod response;

pub use dispatcher::{DispatchError, SkillDispatcher};
pub use request::{DeviceKind, Intent, RequestEnvelope, SkillRequest, DISPLAY_INTERFACE};
pub use response::ResponseEnvelope;
