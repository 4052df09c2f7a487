//! Crop batch: discover, transform each file in turn, tally the outcomes.

use crate::config::CropConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::types::{BatchReport, ProcessingOutcome, SourceFile};

use super::codec::{ImageCodec, RustCodec};
use super::discovery::{DiscoveryOrder, FileDiscovery};
use super::transform::Transformer;

/// Crops the bottom strip off every image in a folder and re-encodes it.
pub struct CropPipeline<C: ImageCodec = RustCodec> {
    discovery: FileDiscovery,
    transformer: Transformer<C>,
}

impl CropPipeline<RustCodec> {
    /// Create a pipeline using the production codec.
    pub fn new(config: CropConfig) -> Self {
        Self::with_codec(config, RustCodec)
    }
}

impl<C: ImageCodec> CropPipeline<C> {
    /// Create a pipeline with a specific codec.
    pub fn with_codec(config: CropConfig, codec: C) -> Self {
        Self {
            discovery: FileDiscovery::new(&config.supported_formats, DiscoveryOrder::Filesystem),
            transformer: Transformer::with_codec(config, codec),
        }
    }

    pub fn config(&self) -> &CropConfig {
        self.transformer.config()
    }

    /// List the images in the source directory, in enumeration order.
    ///
    /// Nothing is created on disk here, so a missing source directory leaves
    /// no trace.
    pub fn discover(&self) -> PipelineResult<Vec<SourceFile>> {
        self.discovery.discover(&self.config().source_dir)
    }

    /// Transform every file, strictly one after another.
    ///
    /// `on_outcome` is called after each file. A failing file never stops
    /// the batch; only failing to create the output directory does.
    pub fn run<F>(&self, files: &[SourceFile], mut on_outcome: F) -> PipelineResult<BatchReport>
    where
        F: FnMut(&ProcessingOutcome),
    {
        let mut report = BatchReport::default();
        if files.is_empty() {
            return Ok(report);
        }

        let output_dir = &self.config().output_dir;
        if !output_dir.is_dir() {
            std::fs::create_dir_all(output_dir).map_err(|e| PipelineError::Io {
                path: output_dir.clone(),
                message: format!("Cannot create output directory: {e}"),
            })?;
            tracing::info!("Created output folder: {:?}", output_dir);
        }

        for file in files {
            tracing::debug!("Processing: {:?}", file.path);
            let outcome = self.transformer.transform(file, output_dir);
            on_outcome(&outcome);
            report.record(outcome);
        }

        tracing::debug!(
            "Batch finished: {} succeeded, {} failed",
            report.succeeded,
            report.failed()
        );
        Ok(report)
    }

    /// Discover and run in one go.
    pub fn execute<F>(&self, on_outcome: F) -> PipelineResult<BatchReport>
    where
        F: FnMut(&ProcessingOutcome),
    {
        let files = self.discover()?;
        self.run(&files, on_outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TargetFormat;
    use crate::error::CodecError;
    use crate::pipeline::CropGeometry;

    /// Accepts any bytes starting with "ok" as a 10x10 image.
    struct PickyCodec;

    impl ImageCodec for PickyCodec {
        type Image = (u32, u32);

        fn decode(&self, bytes: &[u8]) -> Result<(u32, u32), CodecError> {
            if bytes.starts_with(b"ok") {
                Ok((10, 10))
            } else {
                Err(CodecError::new("unsupported"))
            }
        }

        fn dimensions(&self, image: &(u32, u32)) -> (u32, u32) {
            *image
        }

        fn crop(&self, _image: &(u32, u32), geometry: &CropGeometry) -> (u32, u32) {
            (geometry.width, geometry.height)
        }

        fn encode(
            &self,
            image: &(u32, u32),
            _format: TargetFormat,
            _quality: u8,
        ) -> Result<Vec<u8>, CodecError> {
            Ok(format!("{}x{}", image.0, image.1).into_bytes())
        }
    }

    fn config_for(root: &std::path::Path) -> CropConfig {
        CropConfig {
            source_dir: root.join("src"),
            output_dir: root.join("out").join("nested"),
            ..CropConfig::default()
        }
    }

    #[test]
    fn test_batch_continues_past_failures() {
        let root = tempfile::tempdir().unwrap();
        let config = config_for(root.path());
        std::fs::create_dir(&config.source_dir).unwrap();
        std::fs::write(config.source_dir.join("bad1.png"), b"nope").unwrap();
        std::fs::write(config.source_dir.join("good.jpg"), b"ok").unwrap();
        std::fs::write(config.source_dir.join("bad2.gif"), b"nope").unwrap();
        std::fs::write(config.source_dir.join("skip.txt"), b"ok").unwrap();

        let pipeline = CropPipeline::with_codec(config.clone(), PickyCodec);
        let mut seen = Vec::new();
        let report = pipeline
            .execute(|outcome| seen.push(outcome.file_name().to_string()))
            .unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.succeeded, 1);
        assert_eq!(report.failed(), 2);
        assert_eq!(seen.len(), 3);
        assert!(!seen.contains(&"skip.txt".to_string()));
        assert_eq!(
            std::fs::read_to_string(config.output_dir.join("good.webp")).unwrap(),
            "10x9"
        );
        assert!(!config.output_dir.join("bad1.webp").exists());
    }

    #[test]
    fn test_missing_source_creates_nothing() {
        let root = tempfile::tempdir().unwrap();
        let config = config_for(root.path());

        let pipeline = CropPipeline::with_codec(config.clone(), PickyCodec);
        let err = pipeline.execute(|_| {}).unwrap_err();

        assert!(matches!(err, PipelineError::DirectoryNotFound(_)));
        assert!(!config.output_dir.exists());
        assert!(!root.path().join("out").exists());
    }

    #[test]
    fn test_empty_source_reports_zero() {
        let root = tempfile::tempdir().unwrap();
        let config = config_for(root.path());
        std::fs::create_dir(&config.source_dir).unwrap();

        let pipeline = CropPipeline::with_codec(config.clone(), PickyCodec);
        let report = pipeline.execute(|_| {}).unwrap();

        assert_eq!(report.total, 0);
        assert_eq!(report.summary_line(), "Successfully processed 0/0 images.");
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn test_rerun_overwrites_outputs() {
        let root = tempfile::tempdir().unwrap();
        let config = config_for(root.path());
        std::fs::create_dir(&config.source_dir).unwrap();
        std::fs::write(config.source_dir.join("a.png"), b"ok").unwrap();

        let pipeline = CropPipeline::with_codec(config.clone(), PickyCodec);
        let first = pipeline.execute(|_| {}).unwrap();
        let second = pipeline.execute(|_| {}).unwrap();

        assert_eq!(first.succeeded, 1);
        assert_eq!(second.succeeded, 1);
        assert_eq!(std::fs::read_dir(&config.output_dir).unwrap().count(), 1);
    }
}
