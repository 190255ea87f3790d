//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The error type for `st-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("palette must contain at least one color")]
    EmptyPalette,
}

/// Shorthand result type for `st-core`.
pub type CoreResult<T> = Result<T, CoreError>;
