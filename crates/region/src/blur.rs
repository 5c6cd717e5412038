//! Two-pass separable box blur.
//!
//! Horizontal then vertical pass, unweighted mean over a `2r + 1` window,
//! sampling clamped at the edges. Integer accumulation keeps uniform input
//! a fixed point, which is what makes blur-fill a no-op over flat
//! background.

use image::{Rgba, RgbaImage};

/// Smallest permitted blur radius
pub const MIN_BLUR_RADIUS: u32 = 1;
/// Largest permitted blur radius
pub const MAX_BLUR_RADIUS: u32 = 32;

enum Axis {
    Horizontal,
    Vertical,
}

fn blur_pass(src: &RgbaImage, radius: u32, axis: Axis) -> RgbaImage {
    let (w, h) = src.dimensions();
    let window = (2 * radius + 1) as u32;
    let r = radius as i64;
    let mut out = RgbaImage::new(w, h);

    for y in 0..h {
        for x in 0..w {
            let mut sum = [0u32; 4];
            for k in -r..=r {
                let (sx, sy) = match axis {
                    Axis::Horizontal => ((x as i64 + k).clamp(0, w as i64 - 1) as u32, y),
                    Axis::Vertical => (x, (y as i64 + k).clamp(0, h as i64 - 1) as u32),
                };
                let px = src.get_pixel(sx, sy);
                for c in 0..4 {
                    sum[c] += px[c] as u32;
                }
            }
            out.put_pixel(
                x,
                y,
                Rgba([
                    (sum[0] / window) as u8,
                    (sum[1] / window) as u8,
                    (sum[2] / window) as u8,
                    (sum[3] / window) as u8,
                ]),
            );
        }
    }
    out
}

/// Box-blur an RGBA raster; the radius clamps to `[1, 32]`
pub fn box_blur(raster: &RgbaImage, radius: u32) -> RgbaImage {
    let radius = radius.clamp(MIN_BLUR_RADIUS, MAX_BLUR_RADIUS);
    let (w, h) = raster.dimensions();
    if w == 0 || h == 0 {
        return raster.clone();
    }
    let horizontal = blur_pass(raster, radius, Axis::Horizontal);
    blur_pass(&horizontal, radius, Axis::Vertical)
}
