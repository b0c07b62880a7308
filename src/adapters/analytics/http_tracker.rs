//! HTTP analytics tracker - Posts events to a collector as JSON.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpTrackerConfig::new("https://collector.example.com/events", api_key)
//!     .with_timeout(Duration::from_secs(5));
//!
//! let tracker = HttpAnalyticsTracker::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::ports::{AnalyticsError, AnalyticsEvent, AnalyticsTracker};

/// Header carrying the collector API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Configuration for the HTTP tracker.
#[derive(Debug, Clone)]
pub struct HttpTrackerConfig {
    /// Collector URL events are posted to.
    pub endpoint: String,
    api_key: Secret<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpTrackerConfig {
    /// Creates a configuration for the given collector.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: Secret::new(api_key.into()),
            timeout: Duration::from_secs(5),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Collector payload.
#[derive(Debug, Serialize)]
struct TrackRequest<'a> {
    id: String,
    conversation_id: &'a str,
    event: &'a str,
    metadata: Option<&'a Value>,
    speech: &'a str,
    occurred_at: String,
}

impl<'a> From<&'a AnalyticsEvent> for TrackRequest<'a> {
    fn from(event: &'a AnalyticsEvent) -> Self {
        Self {
            id: event.id.to_string(),
            conversation_id: event.conversation_id.as_str(),
            event: &event.name,
            metadata: event.metadata.as_ref(),
            speech: &event.speech,
            occurred_at: event.occurred_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Analytics tracker backed by an HTTP collector.
pub struct HttpAnalyticsTracker {
    config: HttpTrackerConfig,
    client: Client,
}

impl HttpAnalyticsTracker {
    /// Creates a tracker with its own HTTP client.
    pub fn new(config: HttpTrackerConfig) -> Result<Self, AnalyticsError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                AnalyticsError::Transport(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl AnalyticsTracker for HttpAnalyticsTracker {
    async fn track(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .header(API_KEY_HEADER, self.config.api_key())
            .json(&TrackRequest::from(&event))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AnalyticsError::Transport(format!(
                        "timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else {
                    AnalyticsError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyticsError::Rejected(status.as_u16()));
        }

        tracing::debug!(
            event = %event.name,
            conversation_id = %event.conversation_id,
            "analytics event sent"
        );
        Ok(())
    }
}
