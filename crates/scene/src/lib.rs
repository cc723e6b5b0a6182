#![deny(unsafe_code)]
//! Animated 3D renderer for logo-forge.
//!
//! [`scene::Scene`] maps a configuration onto a mesh, material, lights, an
//! accent ring, orbiting particles and a label, animated by elapsed time.
//! Backends implement [`backend::SceneBackend`]; [`preview::render_preview`]
//! falls back to the flat renderer when a backend fails.

pub mod backend;
pub mod controls;
pub mod error;
pub mod material;
pub mod mesh;
pub mod preview;
pub mod scene;

pub use backend::{HeadlessBackend, SceneBackend, UnavailableBackend};
pub use error::SceneError;
pub use preview::{render_preview, Preview, RendererKind};
pub use scene::Scene;
