//! Voice platform request envelope.
//!
//! Only the fields the dialog reads are modeled; everything else the
//! platform sends is ignored.

use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::measurement::{SessionAttributes, SlotValue};

// ════════════════════════════════════════════════════════════════════════════
// Envelope
// ════════════════════════════════════════════════════════════════════════════

/// Top-level request body posted by the voice platform.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: Option<String>,
    pub session: Session,
    #[serde(default)]
    pub context: Option<Context>,
    pub request: SkillRequest,
}

impl RequestEnvelope {
    /// Screen capability of the device that sent the request.
    ///
    /// A missing context reads as a legacy, voice-only device.
    pub fn device_kind(&self) -> DeviceKind {
        let has_display = self
            .context
            .as_ref()
            .and_then(|c| c.system.as_ref())
            .and_then(|s| s.device.as_ref())
            .is_some_and(|d| d.supported_interfaces.contains_key(DISPLAY_INTERFACE));

        if has_display {
            DeviceKind::Display
        } else {
            DeviceKind::Legacy
        }
    }
}

/// Interface name a screen-equipped device advertises.
pub const DISPLAY_INTERFACE: &str = "Display";

/// Whether the requesting device can render a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Display,
    Legacy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// True on the first request of a conversation.
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    pub application: Application,
    /// Attributes returned by the previous turn; absent on the first.
    #[serde(default)]
    pub attributes: Option<SessionAttributes>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default)]
    pub system: Option<SystemContext>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemContext {
    #[serde(default)]
    pub device: Option<Device>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default)]
    pub supported_interfaces: HashMap<String, serde_json::Value>,
}

// ════════════════════════════════════════════════════════════════════════════
// Request
// ════════════════════════════════════════════════════════════════════════════

/// The request itself, discriminated by its `type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum SkillRequest {
    LaunchRequest {
        #[serde(rename = "requestId")]
        request_id: String,
    },
    IntentRequest {
        #[serde(rename = "requestId")]
        request_id: String,
        intent: Intent,
    },
    SessionEndedRequest {
        #[serde(rename = "requestId")]
        request_id: String,
        #[serde(default)]
        reason: Option<String>,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// Slot values keyed by slot name.
    pub fn slot_values(&self) -> HashMap<String, SlotValue> {
        self.slots
            .iter()
            .map(|(name, slot)| (name.clone(), SlotValue::from(slot.value.clone())))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub name: Option<String>,
    /// Recognized text; absent when the user did not fill the slot.
    #[serde(default)]
    pub value: Option<String>,
}
