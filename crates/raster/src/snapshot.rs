//! PNG export of rendered logos.
//!
//! This module is feature-gated behind `png` (default on) so that consumers
//! that only need draw lists or raw pixels do not pull in the `image` crate.
//! The premultiplied-to-straight conversion lives in [`crate::pixel`].

use std::io::Cursor;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageFormat, RgbaImage};
use logo_forge_core::error::LogoError;

use crate::rasterizer::RenderedImage;

/// Pixel size of a downloaded PNG.
pub const DOWNLOAD_SIZE: u32 = 800;

/// Pixel size of an inline preview.
pub const PREVIEW_SIZE: u32 = 300;

fn to_rgba_image(image: &RenderedImage) -> Result<RgbaImage, LogoError> {
    RgbaImage::from_raw(image.width(), image.height(), image.pixels().to_vec())
        .ok_or_else(|| LogoError::Rendering("RGBA buffer size mismatch".into()))
}

/// Encodes `image` as PNG bytes.
pub fn png_bytes(image: &RenderedImage) -> Result<Vec<u8>, LogoError> {
    let mut buf = Vec::new();
    to_rgba_image(image)?
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| LogoError::Rendering(e.to_string()))?;
    Ok(buf)
}

/// Encodes `image` as a `data:image/png;base64,...` URI.
pub fn png_data_uri(image: &RenderedImage) -> Result<String, LogoError> {
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png_bytes(image)?)))
}

/// Writes `image` as a PNG file.
///
/// Returns `LogoError::Io` on write failure.
pub fn write_png(image: &RenderedImage, path: &Path) -> Result<(), LogoError> {
    to_rgba_image(image)?
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| LogoError::Io(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::Rasterizer;
    use logo_forge_core::filters::FilterSelection;
    use logo_forge_core::generator::generate_with;
    use logo_forge_core::prng::Xorshift64;

    fn rendered(size: u32) -> RenderedImage {
        let config =
            generate_with("Acme", &FilterSelection::random(), &mut Xorshift64::new(21)).unwrap();
        Rasterizer::new().render(&config, size, 1.0).unwrap()
    }

    #[test]
    fn write_png_round_trip() {
        let image = rendered(32);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("acme-logo.png");

        write_png(&image, &path).unwrap();

        let back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(back.width(), 32);
        assert_eq!(back.height(), 32);
        assert_eq!(back.as_raw().as_slice(), image.pixels());
    }

    #[test]
    fn write_png_to_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("x.png");
        let err = write_png(&rendered(8), &path).unwrap_err();
        assert!(matches!(err, LogoError::Io(_)));
    }

    #[test]
    fn png_bytes_have_signature() {
        let bytes = png_bytes(&rendered(16)).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn data_uri_prefix_and_payload() {
        let uri = png_data_uri(&rendered(16)).unwrap();
        let payload = uri.strip_prefix("data:image/png;base64,").unwrap();
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(&decoded[..4], b"\x89PNG");
    }
}
