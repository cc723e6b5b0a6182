#![deny(unsafe_code)]
//! Core types for the logo-forge generator.
//!
//! Provides the closed style sets (`Shape`, `FontStyle`, `Effect`, `Layout`,
//! `Pattern`), the `Palette`/`PaletteCategory` catalog, the `Srgb` color
//! type, the `RandomSource` abstraction with its `Xorshift64`
//! implementation, the configuration generator, the rendering contract shared
//! by the 2D and 3D renderers, and the static SVG exporter.

pub mod color;
pub mod config;
pub mod contract;
pub mod error;
pub mod export;
pub mod filters;
pub mod generator;
pub mod geometry;
pub mod palette;
pub mod params;
pub mod prng;
pub mod style;

pub use color::Srgb;
pub use config::{normalize_name, BezierCurve, LogoConfiguration, StyleParams};
pub use contract::{EffectTreatment, FillStyle, FontFace, TextPlacement};
pub use error::LogoError;
pub use export::{export_filename, export_svg, ExportFormat};
pub use filters::{Choice, FilterSelection};
pub use generator::{generate, generate_batch, generate_with, BatchSize};
pub use palette::{ColorRole, Palette, PaletteCategory};
pub use prng::{RandomSource, Xorshift64};
pub use style::{ClosedSet, Effect, FontStyle, Layout, Pattern, Shape};
