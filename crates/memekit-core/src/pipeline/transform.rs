//! Per-file transform: decode, trim the bottom strip, re-encode, write.

use std::path::{Path, PathBuf};

use crate::config::CropConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::output::write_atomic;
use crate::types::{ProcessingOutcome, SourceFile};

use super::codec::{ImageCodec, RustCodec};
use super::geometry::CropGeometry;

/// Converts one image at a time according to a [`CropConfig`].
pub struct Transformer<C: ImageCodec = RustCodec> {
    codec: C,
    config: CropConfig,
}

impl Transformer<RustCodec> {
    /// Create a transformer using the production codec.
    pub fn new(config: CropConfig) -> Self {
        Self::with_codec(config, RustCodec)
    }
}

impl<C: ImageCodec> Transformer<C> {
    /// Create a transformer with a specific codec.
    pub fn with_codec(config: CropConfig, codec: C) -> Self {
        Self { codec, config }
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// Transform `source` into `output_dir`.
    ///
    /// Never fails: every error is folded into a
    /// [`ProcessingOutcome::Failure`] and no output file is left behind.
    pub fn transform(&self, source: &SourceFile, output_dir: &Path) -> ProcessingOutcome {
        match self.try_transform(source, output_dir) {
            Ok(output_path) => {
                tracing::debug!("Wrote {:?}", output_path);
                ProcessingOutcome::Success {
                    file_name: source.file_name.clone(),
                    output_file_name: self.output_file_name(source),
                }
            }
            Err(e) => {
                tracing::debug!("Failed: {:?} - {}", source.path, e);
                ProcessingOutcome::Failure {
                    file_name: source.file_name.clone(),
                    error: e.to_string(),
                }
            }
        }
    }

    /// Output file name for `source`: same stem, target format extension.
    pub fn output_file_name(&self, source: &SourceFile) -> String {
        source.output_file_name(self.config.target_format.extension())
    }

    fn try_transform(&self, source: &SourceFile, output_dir: &Path) -> PipelineResult<PathBuf> {
        let path = &source.path;

        let bytes = std::fs::read(path).map_err(|e| PipelineError::Io {
            path: path.clone(),
            message: format!("Cannot read file: {e}"),
        })?;

        let image = self
            .codec
            .decode(&bytes)
            .map_err(|e| PipelineError::Decode {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let (width, height) = self.codec.dimensions(&image);
        let geometry = CropGeometry::trim_bottom(width, height, self.config.trim_percent)
            .ok_or_else(|| PipelineError::InvalidGeometry {
                path: path.clone(),
                width,
                height,
            })?;
        tracing::trace!(
            "  Crop {}x{} -> {}x{}",
            width,
            height,
            geometry.width,
            geometry.height
        );

        let cropped = self.codec.crop(&image, &geometry);
        let encoded = self
            .codec
            .encode(&cropped, self.config.target_format, self.config.quality)
            .map_err(|e| PipelineError::Encode {
                path: path.clone(),
                message: e.to_string(),
            })?;

        std::fs::create_dir_all(output_dir).map_err(|e| PipelineError::Io {
            path: output_dir.to_path_buf(),
            message: format!("Cannot create output directory: {e}"),
        })?;
        let output_path = output_dir.join(self.output_file_name(source));
        write_atomic(&output_path, &encoded).map_err(|e| PipelineError::Io {
            path: output_path.clone(),
            message: format!("Cannot write output: {e}"),
        })?;

        Ok(output_path)
    }
}
