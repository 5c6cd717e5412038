//! Distance-based edge feathering.
//!
//! Each foreground pixel is assigned `255 * min(d, r) / r` where `d` is the
//! Euclidean distance to the nearest background pixel inside the radius
//! window. Alpha ramps from 0 at the boundary to full strength at and past
//! the radius; background pixels are untouched.

use image::GrayImage;

use crate::error::Result;
use crate::traits::MaskFilter;

/// Soften the mask edge over `radius` pixels
pub fn feather(mask: &GrayImage, radius: u32) -> GrayImage {
    if radius == 0 {
        return mask.clone();
    }
    let (w, h) = mask.dimensions();
    let mut out = mask.clone();
    let Some((wx0, wy0, wx1, wy1)) = super::morphology::foreground_window(mask) else {
        return out;
    };
    let data = mask.as_raw();

    // Only foreground pixels change; iteration stays inside their bbox.
    let r = radius as i64;
    let r_f = radius as f64;
    let out_data: &mut [u8] = &mut out;

    for y in wy0..wy1 {
        for x in wx0..wx1 {
            let idx = (y * w + x) as usize;
            if data[idx] == 0 {
                continue;
            }

            let mut nearest_sq: Option<i64> = None;
            let y_lo = (y as i64 - r).max(0) as u32;
            let y_hi = ((y as i64 + r) as u64).min(h as u64 - 1) as u32;
            let x_lo = (x as i64 - r).max(0) as u32;
            let x_hi = ((x as i64 + r) as u64).min(w as u64 - 1) as u32;

            'window: for ny in y_lo..=y_hi {
                for nx in x_lo..=x_hi {
                    if data[(ny * w + nx) as usize] == 0 {
                        let dx = nx as i64 - x as i64;
                        let dy = ny as i64 - y as i64;
                        let d_sq = dx * dx + dy * dy;
                        match nearest_sq {
                            Some(best) if best <= d_sq => {}
                            _ => nearest_sq = Some(d_sq),
                        }
                        if d_sq <= 1 {
                            // Touching the boundary; no closer pixel exists
                            break 'window;
                        }
                    }
                }
            }

            let alpha = match nearest_sq {
                Some(d_sq) => {
                    let d = (d_sq as f64).sqrt();
                    (255.0 * d.min(r_f) / r_f).round() as u8
                }
                // No background within reach: full strength
                None => 255,
            };
            out_data[idx] = alpha;
        }
    }
    out
}

/// Feathering as a pipeline filter
#[derive(Debug, Clone, Copy)]
pub struct FeatherFilter {
    pub radius: u32,
}

impl MaskFilter for FeatherFilter {
    fn apply(&self, mask: &GrayImage) -> Result<GrayImage> {
        Ok(feather(mask, self.radius))
    }
}
