//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Folder (relative to the project root) holding the images to crop.
pub const DEFAULT_CROP_SOURCE_DIR: &str =
    "来自_3Dalia_的照片和图片组合_Shutterstock_投稿者Shutterstock";

/// Label prefixed to every manifest entry name. Consumers match on it, so it
/// must stay byte-identical.
pub const DEFAULT_MANIFEST_LABEL: &str = "表情";

/// Raster format written by the crop pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    /// Lossy WebP
    #[default]
    WebP,
    /// Baseline JPEG
    Jpeg,
    /// Lossless PNG, quality is ignored
    Png,
}

impl TargetFormat {
    /// File extension (without the dot) for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            TargetFormat::WebP => "webp",
            TargetFormat::Jpeg => "jpg",
            TargetFormat::Png => "png",
        }
    }
}

impl std::fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetFormat::WebP => write!(f, "webp"),
            TargetFormat::Jpeg => write!(f, "jpeg"),
            TargetFormat::Png => write!(f, "png"),
        }
    }
}

/// Crop-and-convert settings (pipeline A).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Directory scanned for input images
    pub source_dir: PathBuf,

    /// Directory receiving the converted images
    pub output_dir: PathBuf,

    /// Accepted input extensions (case-insensitive)
    pub supported_formats: Vec<String>,

    /// Percentage of the image height removed from the bottom
    pub trim_percent: u32,

    /// Output raster format
    pub target_format: TargetFormat,

    /// Encoder quality on a 0-100 scale
    pub quality: u8,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_CROP_SOURCE_DIR),
            output_dir: PathBuf::from("output"),
            supported_formats: vec![
                "jpg".to_string(),
                "jpeg".to_string(),
                "png".to_string(),
                "gif".to_string(),
            ],
            trim_percent: 5,
            target_format: TargetFormat::WebP,
            quality: 90,
        }
    }
}

/// Manifest generation settings (pipeline B).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Directory listed into the manifest
    pub source_dir: PathBuf,

    /// Where the manifest JSON is written
    pub output_path: PathBuf,

    /// Accepted image extensions (case-insensitive)
    pub supported_formats: Vec<String>,

    /// Display-name label, followed by a 1-based counter
    pub label: String,

    /// Public URL prefix joined with each file name
    pub public_prefix: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("public").join("meme-base"),
            output_path: PathBuf::from("public").join("meme-manifest.json"),
            supported_formats: vec![
                "webp".to_string(),
                "jpg".to_string(),
                "jpeg".to_string(),
                "png".to_string(),
            ],
            label: DEFAULT_MANIFEST_LABEL.to_string(),
            public_prefix: "/meme-base/".to_string(),
        }
    }
}
