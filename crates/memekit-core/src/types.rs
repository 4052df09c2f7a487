//! Core data types shared by both pipelines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// One input image found by discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Full path to the file
    pub path: PathBuf,
    /// Base file name, e.g. `cat.JPG`
    pub file_name: String,
    /// Lower-cased extension without the dot, e.g. `jpg`
    pub extension: String,
}

impl SourceFile {
    /// Build a source file from a path. Returns `None` for paths without a file name.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_string_lossy().into_owned();
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        Some(Self {
            path: path.to_path_buf(),
            file_name,
            extension,
        })
    }

    /// File name with the extension replaced by `extension`.
    pub fn output_file_name(&self, extension: &str) -> String {
        let stem = Path::new(&self.file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file_name.clone());
        format!("{stem}.{extension}")
    }
}

/// Result of transforming one file in the crop batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingOutcome {
    Success {
        file_name: String,
        output_file_name: String,
    },
    Failure {
        file_name: String,
        error: String,
    },
}

impl ProcessingOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProcessingOutcome::Success { .. })
    }

    /// Name of the input file this outcome belongs to.
    pub fn file_name(&self) -> &str {
        match self {
            ProcessingOutcome::Success { file_name, .. }
            | ProcessingOutcome::Failure { file_name, .. } => file_name,
        }
    }
}

impl fmt::Display for ProcessingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingOutcome::Success {
                file_name,
                output_file_name,
            } => write!(f, "✓ Processed: {file_name} -> {output_file_name}"),
            ProcessingOutcome::Failure { file_name, error } => {
                write!(f, "✗ Error processing {file_name}: {error}")
            }
        }
    }
}

/// Tally of a finished crop batch.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Per-file outcomes in processing order
    pub outcomes: Vec<ProcessingOutcome>,
    /// Files converted successfully
    pub succeeded: usize,
    /// Files attempted
    pub total: usize,
}

impl BatchReport {
    /// Record one outcome.
    pub fn record(&mut self, outcome: ProcessingOutcome) {
        if outcome.is_success() {
            self.succeeded += 1;
        }
        self.total += 1;
        self.outcomes.push(outcome);
    }

    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }

    /// Final tally line, e.g. `Successfully processed 1/2 images.`
    pub fn summary_line(&self) -> String {
        format!(
            "Successfully processed {}/{} images.",
            self.succeeded, self.total
        )
    }
}

/// One record of the meme manifest.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Display name, e.g. `表情 3`
    pub name: String,
    /// Public path served to the front-end, e.g. `/meme-base/cat.webp`
    pub path: String,
    /// Raw file name
    pub filename: String,
}

/// What a manifest run produced.
#[derive(Debug, Clone)]
pub struct ManifestSummary {
    /// Number of entries written
    pub entries: usize,
    /// Location of the written manifest
    pub output_path: PathBuf,
}
