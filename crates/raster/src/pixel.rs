//! Pure-computation pixel buffer conversion.
//!
//! The rasterizer draws into a premultiplied-alpha buffer; PNG encoding and
//! pixel comparisons want straight alpha. This module is independent of the
//! `png` feature so headless backends can share the conversion.

/// Converts a premultiplied RGBA8 buffer to straight (unassociated) alpha.
///
/// Fully transparent pixels become `[0, 0, 0, 0]`. The output has the same
/// length as the input; a trailing partial pixel is copied unchanged.
pub fn unpremultiply_rgba(premultiplied: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(premultiplied.len());
    let mut chunks = premultiplied.chunks_exact(4);
    for px in &mut chunks {
        let a = px[3];
        if a == 0 {
            out.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }
        let scale = 255.0 / f32::from(a);
        let channel = |c: u8| (f32::from(c) * scale).round().min(255.0) as u8;
        out.extend_from_slice(&[channel(px[0]), channel(px[1]), channel(px[2]), a]);
    }
    out.extend_from_slice(chunks.remainder());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_pixels_pass_through() {
        let px = [10, 200, 30, 255, 0, 0, 0, 255];
        assert_eq!(unpremultiply_rgba(&px), px.to_vec());
    }

    #[test]
    fn transparent_pixels_become_zero() {
        assert_eq!(unpremultiply_rgba(&[5, 5, 5, 0]), vec![0, 0, 0, 0]);
    }

    #[test]
    fn half_alpha_doubles_channels() {
        let out = unpremultiply_rgba(&[64, 32, 0, 128]);
        assert_eq!(out[3], 128);
        assert!((i32::from(out[0]) - 128).abs() <= 1, "{out:?}");
        assert!((i32::from(out[1]) - 64).abs() <= 1, "{out:?}");
        assert_eq!(out[2], 0);
    }

    #[test]
    fn channels_saturate() {
        let out = unpremultiply_rgba(&[200, 0, 0, 100]);
        assert_eq!(out[0], 255);
    }

    #[test]
    fn length_is_preserved() {
        assert_eq!(unpremultiply_rgba(&[1, 2, 3, 4, 5, 6]).len(), 6);
    }
}
