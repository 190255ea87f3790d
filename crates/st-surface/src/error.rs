//! Surface error type.

use thiserror::Error;

/// Errors produced by `st-surface`.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("surface must be non-empty, got {width}x{height}")]
    Empty { width: u32, height: u32 },

    #[error("surface of {width}x{height} is too large to allocate")]
    TooLarge { width: u32, height: u32 },

    #[error("RGBA buffer length {got} does not match {width}x{height} (expected {expected})")]
    BufferSize {
        width:    u32,
        height:   u32,
        expected: usize,
        got:      usize,
    },
}

pub type SurfaceResult<T> = Result<T, SurfaceError>;
