//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.crop.supported_formats.is_empty() {
            return Err(ConfigError::ValidationError(
                "crop.supported_formats must not be empty".into(),
            ));
        }
        if self.crop.trim_percent == 0 || self.crop.trim_percent >= 100 {
            return Err(ConfigError::ValidationError(
                "crop.trim_percent must be between 1 and 99".into(),
            ));
        }
        if self.crop.quality > 100 {
            return Err(ConfigError::ValidationError(
                "crop.quality must be between 0 and 100".into(),
            ));
        }
        if self.manifest.supported_formats.is_empty() {
            return Err(ConfigError::ValidationError(
                "manifest.supported_formats must not be empty".into(),
            ));
        }
        if self.manifest.label.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "manifest.label must not be empty".into(),
            ));
        }
        if self.manifest.public_prefix.is_empty() {
            return Err(ConfigError::ValidationError(
                "manifest.public_prefix must not be empty".into(),
            ));
        }
        Ok(())
    }
}
