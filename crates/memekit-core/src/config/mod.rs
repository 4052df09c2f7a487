//! Configuration for the memekit pipelines.
//!
//! There is no configuration file: a [`Config`] is built from defaults,
//! anchored to a project root with [`Config::for_project_root`], adjusted by
//! the caller, and passed explicitly into each pipeline.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Crop-and-convert settings
    pub crop: CropConfig,

    /// Manifest generation settings
    pub manifest: ManifestConfig,
}

impl Config {
    /// Default configuration with every directory resolved under `root`.
    pub fn for_project_root(root: &Path) -> Self {
        let mut config = Self::default();
        config.crop.source_dir = root.join(&config.crop.source_dir);
        config.crop.output_dir = root.join(&config.crop.output_dir);
        config.manifest.source_dir = root.join(&config.manifest.source_dir);
        config.manifest.output_path = root.join(&config.manifest.output_path);
        config
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}
