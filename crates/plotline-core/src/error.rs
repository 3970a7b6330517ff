// File: crates/plotline-core/src/error.rs
// Summary: Error type for the headless rendering pipeline.

use thiserror::Error;

/// Failures of the headless export paths. Chart configuration itself is
/// never validated; degenerate inputs surface as degenerate geometry,
/// not as errors.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create {width}x{height} raster surface")]
    SurfaceCreate { width: i32, height: i32 },
    #[error("failed to encode PNG")]
    PngEncode,
    #[error("failed to read back surface pixels")]
    ReadPixels,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
