//! 3D preview with transparent fallback to the flat renderer.

use tracing::warn;

use logo_forge_core::config::LogoConfiguration;
use logo_forge_core::error::LogoError;
use logo_forge_raster::rasterizer::{Rasterizer, RenderedImage};

use crate::backend::SceneBackend;
use crate::scene::Scene;

/// Which renderer produced a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererKind {
    Scene,
    Flat,
}

impl RendererKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RendererKind::Scene => "scene",
            RendererKind::Flat => "flat",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Preview {
    pub image: RenderedImage,
    pub renderer: RendererKind,
}

/// Renders `config` through `backend` after `elapsed` seconds of animation.
///
/// Any scene failure is logged and answered with the flat 2D rendering of the
/// same configuration; only a failure of the flat renderer itself is returned.
pub fn render_preview(
    config: &LogoConfiguration,
    backend: &dyn SceneBackend,
    fallback: &Rasterizer,
    size: u32,
    dpr: f64,
    elapsed: f32,
) -> Result<Preview, LogoError> {
    let mut scene = Scene::build(config);
    scene.advance(elapsed);
    match backend.render(&scene, size, dpr) {
        Ok(image) => Ok(Preview {
            image,
            renderer: RendererKind::Scene,
        }),
        Err(err) => {
            warn!(
                backend = backend.name(),
                id = config.id(),
                error = %err,
                "3D preview failed, falling back to 2D"
            );
            let image = fallback.render(config, size, dpr)?;
            Ok(Preview {
                image,
                renderer: RendererKind::Flat,
            })
        }
    }
}
