#![deny(unsafe_code)]
//! HTTP API for logo-forge.
//!
//! Exposes batch generation (`POST /api/generate`), the filter and palette
//! catalogs, and a health check. Handlers call the synchronous core directly.

pub mod api;
pub mod config;
pub mod error;

pub use api::{create_router, run_server, AppState};
pub use config::ServerConfig;
pub use error::ApiError;
