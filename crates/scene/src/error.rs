//! Error types for the 3D scene.

use logo_forge_core::error::LogoError;
use thiserror::Error;

/// Errors produced while rendering a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The platform has no 3D rendering capability.
    #[error("3D rendering unsupported: {0}")]
    Unsupported(String),

    /// The scene projected to nothing drawable (e.g. zero-size target).
    #[error("degenerate scene: {0}")]
    Degenerate(String),

    /// Rasterizing the projected scene failed.
    #[error(transparent)]
    Raster(#[from] LogoError),
}
