//! Error types for the logo-forge core.

use thiserror::Error;

/// Errors produced by configuration generation, export, and rendering.
#[derive(Debug, Error)]
pub enum LogoError {
    /// The caller supplied unusable input (e.g. an empty brand name).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A render target had a zero or overflowing size.
    #[error("invalid dimensions: size must be non-zero and fit in u32 after scaling")]
    InvalidDimensions,

    /// The filter object was present but not a JSON object.
    #[error("malformed filters: {0}")]
    MalformedFilters(String),

    /// Rasterization or scene rendering failed.
    #[error("rendering failed: {0}")]
    Rendering(String),

    /// Writing an output file failed.
    #[error("I/O error: {0}")]
    Io(String),
}
