//! memekit core - crop-and-convert and manifest generation for a meme folder.
//!
//! Two independent pipelines share discovery and output helpers:
//!
//! ```text
//! Crop:      folder → Discover → Decode → Trim bottom 5% → Encode WebP → output/
//! Manifest:  folder → Discover (sorted) → Entries → JSON → meme-manifest.json
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use memekit_core::{Config, CropPipeline, ManifestGenerator};
//! use std::path::Path;
//!
//! fn main() -> memekit_core::Result<()> {
//!     let config = Config::for_project_root(Path::new("."));
//!     config.validate()?;
//!
//!     let report = CropPipeline::new(config.crop.clone()).execute(|outcome| println!("{outcome}"))?;
//!     println!("{}", report.summary_line());
//!
//!     let summary = ManifestGenerator::new(config.manifest).generate()?;
//!     println!("{} entries", summary.entries);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::{Config, CropConfig, ManifestConfig, TargetFormat};
pub use error::{CodecError, ConfigError, MemekitError, PipelineError, PipelineResult, Result};
pub use pipeline::{
    CropGeometry, CropPipeline, DiscoveryOrder, FileDiscovery, ImageCodec, Manifest,
    ManifestGenerator, RustCodec, Transformer,
};
pub use types::{BatchReport, ManifestEntry, ManifestSummary, ProcessingOutcome, SourceFile};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
