//! Image pipeline components.
//!
//! - **discovery**: Find image files directly inside a folder
//! - **geometry**: Compute the bottom-trim crop rectangle
//! - **codec**: Decode / crop / encode capability and its `image`-backed implementation
//! - **transform**: Convert a single file
//! - **batch**: Crop-and-convert every file in a folder
//! - **manifest**: Build and write the JSON meme index

pub mod batch;
pub mod codec;
pub mod discovery;
pub mod geometry;
pub mod manifest;
pub mod transform;

// Re-exports for convenient access
pub use batch::CropPipeline;
pub use codec::{ImageCodec, RustCodec};
pub use discovery::{DiscoveryOrder, FileDiscovery};
pub use geometry::CropGeometry;
pub use manifest::{Manifest, ManifestGenerator};
pub use transform::Transformer;
