//! Routes and handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use logo_forge_core::config::normalize_name;
use logo_forge_core::params::{param_i64, param_string};
use logo_forge_core::{
    generate_batch, BatchSize, ClosedSet, Effect, FilterSelection, FontStyle, Layout,
    LogoConfiguration, LogoError, Palette, PaletteCategory, Pattern, Shape,
};

use crate::config::ServerConfig;
use crate::error::{from_json_rejection, from_logo_error, ApiError, ErrorResponse};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config.normalized()),
        }
    }
}

/// POST /api/generate response.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub logos: Vec<LogoConfiguration>,
    /// Trimmed, truncated brand name the logos were generated for.
    pub name: String,
}

/// GET /api/filters response: wire names for every filter field.
#[derive(Debug, Serialize)]
pub struct FiltersResponse {
    pub palettes: Vec<&'static str>,
    pub shapes: Vec<&'static str>,
    pub fonts: Vec<&'static str>,
    pub effects: Vec<&'static str>,
    pub layouts: Vec<&'static str>,
    pub patterns: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct PaletteInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub preview: Palette,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /api/generate - Generate a batch of logo configurations.
///
/// Body fields are read leniently: a non-integer `count` counts as missing,
/// and unknown filter values fall back to random.
async fn generate(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ErrorResponse> {
    let Json(body) = body.map_err(from_json_rejection)?;

    let name = normalize_name(&param_string(&body, "name", ""));
    if name.is_empty() {
        return Err(from_logo_error(LogoError::InvalidInput(
            "Name is required".to_string(),
        )));
    }

    let count = BatchSize::resolve_with_default(param_i64(&body, "count"), state.config.default_count);
    let filters = FilterSelection::from_json(body.get("filters").unwrap_or(&Value::Null))
        .map_err(from_logo_error)?;

    let logos = generate_batch(&name, count, &filters).map_err(from_logo_error)?;
    debug!(name = %name, count = logos.len(), "generated logos");

    Ok(Json(GenerateResponse { logos, name }))
}

/// Any method other than POST on /api/generate.
async fn method_not_allowed() -> ErrorResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiError::new("Method not allowed")),
    )
}

/// GET /api/filters - List the accepted values of every filter field.
async fn list_filters() -> Json<FiltersResponse> {
    Json(FiltersResponse {
        palettes: PaletteCategory::names(),
        shapes: Shape::names(),
        fonts: FontStyle::names(),
        effects: Effect::names(),
        layouts: Layout::names(),
        patterns: Pattern::names(),
    })
}

/// GET /api/palettes - List palette categories with a preview palette each.
async fn list_palettes() -> Json<Vec<PaletteInfo>> {
    Json(
        PaletteCategory::ALL
            .iter()
            .map(|&category| PaletteInfo {
                key: category.as_str(),
                label: category.label(),
                preview: category.preview(),
            })
            .collect(),
    )
}

/// Builds the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/generate", post(generate).fallback(method_not_allowed))
        .route("/api/filters", get(list_filters))
        .route("/api/palettes", get(list_palettes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server until the listener fails.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or serving fails.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.bind;
    let app = create_router(AppState::new(config));

    info!("Starting logo-forge server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
