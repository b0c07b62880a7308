//! Voice skill configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Voice skill configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillConfig {
    /// Application id requests must carry. Unchecked when unset.
    pub application_id: Option<String>,
}

impl SkillConfig {
    /// The configured application id, ignoring blank values.
    pub fn expected_application_id(&self) -> Option<&str> {
        self.application_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Validate skill configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if *environment == Environment::Production && self.expected_application_id().is_none() {
            return Err(ValidationError::MissingRequired("SKILL__APPLICATION_ID"));
        }
        Ok(())
    }
}
