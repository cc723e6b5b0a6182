//! Draw list to pixels via `resvg`.

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use tracing::debug;

use logo_forge_core::config::LogoConfiguration;
use logo_forge_core::error::LogoError;

use crate::draw::DrawList;
use crate::pixel::unpremultiply_rgba;
use crate::render2d::compose;

/// Largest physical edge the rasterizer will allocate.
pub const MAX_PHYSICAL_EDGE: u32 = 8192;

/// A straight-alpha RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RenderedImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA8 bytes, `width * height * 4` long.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// Rasterizes draw lists. System fonts are loaded once at construction and
/// reused for every render.
pub struct Rasterizer {
    options: Options<'static>,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer {
    pub fn new() -> Self {
        let mut options = Options::default();
        options.fontdb_mut().load_system_fonts();
        debug!(faces = options.fontdb.len(), "loaded system fonts");
        Self { options }
    }

    /// Renders `config` on a `size` x `size` logical canvas at `size · dpr`
    /// physical pixels.
    pub fn render(
        &self,
        config: &LogoConfiguration,
        size: u32,
        dpr: f64,
    ) -> Result<RenderedImage, LogoError> {
        if size == 0 {
            return Err(LogoError::InvalidDimensions);
        }
        self.render_list(&compose(config, f64::from(size)), dpr)
    }

    /// Renders an arbitrary draw list, scaling logical units by `dpr`.
    pub fn render_list(&self, list: &DrawList, dpr: f64) -> Result<RenderedImage, LogoError> {
        if !dpr.is_finite() || dpr <= 0.0 {
            return Err(LogoError::InvalidDimensions);
        }
        let width = physical_edge(list.width(), dpr)?;
        let height = physical_edge(list.height(), dpr)?;

        let svg = list.to_svg();
        let tree = Tree::from_str(&svg, &self.options)
            .map_err(|e| LogoError::Rendering(format!("invalid draw list: {e}")))?;
        let mut pixmap = Pixmap::new(width, height).ok_or(LogoError::InvalidDimensions)?;
        let scale = dpr as f32;
        resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

        Ok(RenderedImage {
            width,
            height,
            pixels: unpremultiply_rgba(pixmap.data()),
        })
    }
}

fn physical_edge(logical: f64, dpr: f64) -> Result<u32, LogoError> {
    let edge = (logical * dpr).round();
    if !edge.is_finite() || edge < 1.0 || edge > f64::from(MAX_PHYSICAL_EDGE) {
        return Err(LogoError::InvalidDimensions);
    }
    Ok(edge as u32)
}
