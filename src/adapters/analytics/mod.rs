//! Analytics Adapters.
//!
//! Implementations of the AnalyticsTracker port.
//!
//! ## Available Adapters
//!
//! - `InMemoryAnalyticsTracker` - Records events in memory for tests
//! - `HttpAnalyticsTracker` - Posts events to a JSON collector
//! - `NoopAnalyticsTracker` - Drops events when analytics is disabled

mod http_tracker;
mod in_memory;
mod noop;

pub use http_tracker::{HttpAnalyticsTracker, HttpTrackerConfig, API_KEY_HEADER};
pub use in_memory::InMemoryAnalyticsTracker;
pub use noop::NoopAnalyticsTracker;

use secrecy::ExposeSecret;
use std::sync::Arc;

use crate::config::AnalyticsConfig;
use crate::ports::{AnalyticsError, AnalyticsTracker};

/// Builds the tracker selected by configuration.
///
/// Disabled or incomplete configuration yields the no-op tracker.
pub fn tracker_from_config(
    config: &AnalyticsConfig,
) -> Result<Arc<dyn AnalyticsTracker>, AnalyticsError> {
    let (endpoint, api_key) = match (config.enabled, &config.endpoint, &config.api_key) {
        (true, Some(endpoint), Some(api_key)) => (endpoint, api_key),
        (true, _, _) => {
            tracing::warn!("analytics enabled without endpoint or key, events will be dropped");
            return Ok(Arc::new(NoopAnalyticsTracker));
        }
        (false, _, _) => return Ok(Arc::new(NoopAnalyticsTracker)),
    };

    let http_config = HttpTrackerConfig::new(endpoint.clone(), api_key.expose_secret().clone())
        .with_timeout(config.timeout());
    tracing::info!(endpoint = %endpoint, "analytics reporting enabled");
    Ok(Arc::new(HttpAnalyticsTracker::new(http_config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    #[test]
    fn disabled_config_builds_tracker() {
        assert!(tracker_from_config(&AnalyticsConfig::default()).is_ok());
    }

    #[test]
    fn enabled_config_builds_http_tracker() {
        let config = AnalyticsConfig {
            enabled: true,
            endpoint: Some("https://collector.example.com/events".to_string()),
            api_key: Some(Secret::new("key".to_string())),
            ..Default::default()
        };
        assert!(tracker_from_config(&config).is_ok());
    }
}
