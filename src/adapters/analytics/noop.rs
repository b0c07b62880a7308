//! Tracker used when analytics is disabled.

use async_trait::async_trait;

use crate::ports::{AnalyticsError, AnalyticsEvent, AnalyticsTracker};

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAnalyticsTracker;

#[async_trait]
impl AnalyticsTracker for NoopAnalyticsTracker {
    async fn track(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        tracing::trace!(event = %event.name, "analytics disabled, dropping event");
        Ok(())
    }
}
