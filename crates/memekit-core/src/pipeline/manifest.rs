//! Manifest generation: list the meme folder and write the JSON index the
//! front-end loads.
//!
//! Entries follow the sorted file-name order, and the running number in each
//! display name is the entry's 1-based position in that order.

use serde::{Deserialize, Serialize};

use crate::config::ManifestConfig;
use crate::error::{PipelineError, Result};
use crate::output::{to_pretty_json, write_atomic};
use crate::types::{ManifestEntry, ManifestSummary, SourceFile};

use super::discovery::{DiscoveryOrder, FileDiscovery};

/// Ordered list of manifest entries, serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// UTF-8 JSON, 2-space indent, non-ASCII unescaped, no trailing newline.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        to_pretty_json(self)
    }
}

/// Builds and writes the meme manifest.
pub struct ManifestGenerator {
    config: ManifestConfig,
    discovery: FileDiscovery,
}

impl ManifestGenerator {
    pub fn new(config: ManifestConfig) -> Self {
        let discovery = FileDiscovery::new(&config.supported_formats, DiscoveryOrder::FileName);
        Self { config, discovery }
    }

    pub fn config(&self) -> &ManifestConfig {
        &self.config
    }

    /// List the source folder, sorted by file name.
    pub fn discover(&self) -> std::result::Result<Vec<SourceFile>, PipelineError> {
        self.discovery.discover(&self.config.source_dir)
    }

    /// Describe the file at zero-based `index` of the sorted listing.
    pub fn build_entry(&self, file: &SourceFile, index: usize) -> ManifestEntry {
        ManifestEntry {
            name: format!("{} {}", self.config.label, index + 1),
            path: format!("{}{}", self.config.public_prefix, file.file_name),
            filename: file.file_name.clone(),
        }
    }

    /// Build entries for `files`, preserving their order.
    pub fn build(&self, files: &[SourceFile]) -> Manifest {
        Manifest {
            entries: files
                .iter()
                .enumerate()
                .map(|(index, file)| self.build_entry(file, index))
                .collect(),
        }
    }

    /// Discover, build and overwrite the manifest file.
    pub fn generate(&self) -> Result<ManifestSummary> {
        let files = self.discover()?;
        let manifest = self.build(&files);
        let json = manifest.to_json()?;

        let output_path = &self.config.output_path;
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        write_atomic(output_path, json.as_bytes())?;

        tracing::info!(
            "Manifest with {} entries written to {:?}",
            manifest.len(),
            output_path
        );
        Ok(ManifestSummary {
            entries: manifest.len(),
            output_path: output_path.clone(),
        })
    }
}
