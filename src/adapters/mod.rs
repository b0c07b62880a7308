//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `analytics` - Turn analytics trackers (HTTP collector, in-memory, no-op)
//! - `skill` - Voice platform request/response envelopes and dispatch
//! - `http` - Axum routes serving the skill endpoint

pub mod analytics;
pub mod http;
pub mod skill;

pub use analytics::{
    tracker_from_config, HttpAnalyticsTracker, InMemoryAnalyticsTracker, NoopAnalyticsTracker,
};
pub use skill::{DispatchError, SkillDispatcher};
