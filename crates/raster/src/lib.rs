#![deny(unsafe_code)]
//! Flat 2D renderer for logo-forge.
//!
//! Sits between `logo-forge-core` (which defines configurations and the
//! rendering contract) and the front ends. [`render2d::compose`] turns a
//! configuration into a [`draw::DrawList`]; [`rasterizer::Rasterizer`] turns a
//! draw list into pixels; [`snapshot`] encodes pixels as PNG. The 3D scene
//! crate reuses the draw list and rasterizer for its headless backend.

pub mod draw;
pub mod pattern;
pub mod pixel;
pub mod rasterizer;
pub mod render2d;

#[cfg(feature = "png")]
pub mod snapshot;

pub use draw::{DrawList, Paint, Primitive, Stroke, Style, TextAnchor, TextRun};
pub use rasterizer::{Rasterizer, RenderedImage};
pub use render2d::compose;
