//! In-memory analytics tracker.
//!
//! Keeps every event in process memory. Used by tests and local development
//! where no collector is reachable.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::ConversationId;
use crate::ports::{AnalyticsError, AnalyticsEvent, AnalyticsTracker};

/// In-memory implementation of the AnalyticsTracker port.
///
/// Thread-safe via internal `Mutex`. Does not persist data across restarts.
#[derive(Default)]
pub struct InMemoryAnalyticsTracker {
    events: Mutex<Vec<AnalyticsEvent>>,
    failing: bool,
}

impl InMemoryAnalyticsTracker {
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker whose `track` calls fail.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Returns all recorded events.
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Returns the labels of recorded events, oldest first.
    pub fn names(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.name.clone())
            .collect()
    }

    /// Returns the events recorded for one conversation.
    pub fn events_for(&self, conversation_id: &ConversationId) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| &e.conversation_id == conversation_id)
            .cloned()
            .collect()
    }

    /// Clears all recorded events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl AnalyticsTracker for InMemoryAnalyticsTracker {
    async fn track(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        if self.failing {
            return Err(AnalyticsError::Transport(
                "in-memory tracker configured to fail".to_string(),
            ));
        }
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}
