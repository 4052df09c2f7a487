//! The `memekit crop` command: trim the bottom strip and convert to WebP.

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use memekit_core::{CropPipeline, PipelineError, ProcessingOutcome};
use std::path::PathBuf;

use super::RootArgs;

/// Arguments for the `crop` command.
#[derive(Args, Debug, Default)]
pub struct CropArgs {
    #[command(flatten)]
    pub root: RootArgs,

    /// Source folder (defaults to the Shutterstock folder under the root)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Output folder (defaults to <root>/output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Encoder quality, 0-100
    #[arg(short, long)]
    pub quality: Option<u8>,

    /// Percentage of the height removed from the bottom
    #[arg(long)]
    pub trim_percent: Option<u32>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Execute the crop command.
///
/// A missing source folder or an empty one is reported and is not an error;
/// individual file failures only show up in the report.
pub fn execute(args: CropArgs) -> anyhow::Result<()> {
    let mut config = args.root.config()?;
    if let Some(source) = args.source {
        config.crop.source_dir = source;
    }
    if let Some(output) = args.output {
        config.crop.output_dir = output;
    }
    if let Some(quality) = args.quality {
        config.crop.quality = quality;
    }
    if let Some(trim_percent) = args.trim_percent {
        config.crop.trim_percent = trim_percent;
    }
    config.validate()?;

    let pipeline = CropPipeline::new(config.crop);
    let source_dir = &pipeline.config().source_dir;

    let files = match pipeline.discover() {
        Ok(files) => files,
        Err(PipelineError::DirectoryNotFound(path)) => {
            println!("Source directory not found: {}", path.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    if files.is_empty() {
        println!("No image files found in {}", source_dir.display());
        return Ok(());
    }

    println!("Found {} images to process...", files.len());
    tracing::debug!(
        "Converting to {} at quality {}",
        pipeline.config().target_format,
        pipeline.config().quality
    );

    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        create_progress_bar(files.len() as u64)
    };

    let report = pipeline.run(&files, |outcome| {
        progress.suspend(|| print_outcome(outcome));
        progress.inc(1);
    })?;
    progress.finish_and_clear();

    println!();
    println!("Completed! {}", report.summary_line());

    Ok(())
}

/// One report line per file: green check or red cross.
fn print_outcome(outcome: &ProcessingOutcome) {
    match outcome {
        ProcessingOutcome::Success { .. } => println!("{}", style(outcome).green()),
        ProcessingOutcome::Failure { .. } => println!("{}", style(outcome).red()),
    }
}

/// Create a progress bar for the crop batch.
fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("##-"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_is_not_an_error() {
        let root = tempfile::tempdir().unwrap();
        let args = CropArgs {
            root: RootArgs {
                root: Some(root.path().to_path_buf()),
            },
            no_progress: true,
            ..CropArgs::default()
        };

        execute(args).unwrap();
        assert!(!root.path().join("output").exists());
    }

    #[test]
    fn test_invalid_quality_is_rejected() {
        let root = tempfile::tempdir().unwrap();
        let args = CropArgs {
            root: RootArgs {
                root: Some(root.path().to_path_buf()),
            },
            quality: Some(150),
            no_progress: true,
            ..CropArgs::default()
        };

        let err = execute(args).unwrap_err();
        assert!(err.to_string().contains("quality"));
    }

    #[test]
    fn test_overrides_reach_the_pipeline() {
        let root = tempfile::tempdir().unwrap();
        let source = root.path().join("in");
        let output = root.path().join("out");
        std::fs::create_dir(&source).unwrap();
        std::fs::write(source.join("broken.jpg"), b"nope").unwrap();

        let args = CropArgs {
            root: RootArgs {
                root: Some(root.path().to_path_buf()),
            },
            source: Some(source),
            output: Some(output.clone()),
            no_progress: true,
            ..CropArgs::default()
        };

        execute(args).unwrap();
        // The output folder exists even though the only file failed
        assert!(output.is_dir());
        assert_eq!(std::fs::read_dir(&output).unwrap().count(), 0);
    }
}
