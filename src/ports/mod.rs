//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AnalyticsTracker` - Reports one event per processed turn

mod analytics_tracker;

pub use analytics_tracker::{AnalyticsError, AnalyticsEvent, AnalyticsTracker};
