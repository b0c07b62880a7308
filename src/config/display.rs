//! Display device configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Assets and title used for screen-equipped devices
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Base URL the logo and background images are served from
    #[serde(default = "default_asset_base_url")]
    pub asset_base_url: String,

    /// Title shown on the rendered template
    #[serde(default = "default_title")]
    pub title: String,
}

impl DisplayConfig {
    /// URL of the logo image.
    pub fn logo_url(&self) -> String {
        self.asset_url("logos/scale-340x340.png")
    }

    /// URL of the background image.
    pub fn background_url(&self) -> String {
        self.asset_url("metabolicBackground.png")
    }

    fn asset_url(&self, path: &str) -> String {
        format!("{}/{}", self.asset_base_url.trim_end_matches('/'), path)
    }

    /// Validate display configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let url = self.asset_base_url.as_str();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ValidationError::InvalidAssetBaseUrl);
        }
        if *environment == Environment::Production && !url.starts_with("https://") {
            return Err(ValidationError::AssetBaseUrlMustBeHttps);
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            asset_base_url: default_asset_base_url(),
            title: default_title(),
        }
    }
}

fn default_asset_base_url() -> String {
    "https://s3.amazonaws.com/metablogiccalculator".to_string()
}

fn default_title() -> String {
    "Metabolic Calculator".to_string()
}
