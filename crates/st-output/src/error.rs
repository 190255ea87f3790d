//! Error types for st-output.

use thiserror::Error;

/// Errors that can occur when writing field output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("image encode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("surface reported {width}x{height} but produced {got} bytes")]
    FrameSize { width: u32, height: u32, got: usize },
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
