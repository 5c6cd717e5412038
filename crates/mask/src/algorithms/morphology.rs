//! 3×3 min/max morphology over alpha rasters.
//!
//! Passes iterate only the foreground bounding box expanded by the
//! operation's reach, so cost scales with the affected area rather than the
//! raster. Border pixels are never recomputed; the 3×3 window stays in
//! bounds.

use image::GrayImage;

use crate::error::Result;
use crate::traits::MaskFilter;

/// Inclusive-exclusive iteration window `(x0, y0, x1, y1)`
pub(crate) type Window = (u32, u32, u32, u32);

#[derive(Clone, Copy)]
enum NeighborhoodOp {
    Max,
    Min,
}

/// Bounding window of all pixels with non-zero alpha
pub(crate) fn foreground_window(mask: &GrayImage) -> Option<Window> {
    let (w, h) = mask.dimensions();
    let mut x0 = w;
    let mut x1 = 0u32;
    let mut y0 = h;
    let mut y1 = 0u32;
    let mut has_any = false;

    for (i, &alpha) in mask.as_raw().iter().enumerate() {
        if alpha > 0 {
            let x = (i as u32) % w;
            let y = (i as u32) / w;
            x0 = x0.min(x);
            x1 = x1.max(x + 1);
            y0 = y0.min(y);
            y1 = y1.max(y + 1);
            has_any = true;
        }
    }
    has_any.then_some((x0, y0, x1, y1))
}

fn expand_window(window: Window, reach: u32, width: u32, height: u32) -> Window {
    let (x0, y0, x1, y1) = window;
    (
        x0.saturating_sub(reach),
        y0.saturating_sub(reach),
        (x1 + reach).min(width),
        (y1 + reach).min(height),
    )
}

fn neighborhood_pass(src: &GrayImage, window: Window, op: NeighborhoodOp) -> GrayImage {
    let (w, h) = src.dimensions();
    let mut out = src.clone();
    if w < 3 || h < 3 {
        // No interior pixels to recompute
        return out;
    }

    let (x0, y0, x1, y1) = window;
    let x_start = x0.max(1);
    let x_end = x1.min(w - 1);
    let y_start = y0.max(1);
    let y_end = y1.min(h - 1);

    let data = src.as_raw();
    let out_data: &mut [u8] = &mut out;
    for y in y_start..y_end {
        for x in x_start..x_end {
            let mut acc = data[(y * w + x) as usize];
            for ny in (y - 1)..=(y + 1) {
                for nx in (x - 1)..=(x + 1) {
                    let v = data[(ny * w + nx) as usize];
                    acc = match op {
                        NeighborhoodOp::Max => acc.max(v),
                        NeighborhoodOp::Min => acc.min(v),
                    };
                }
            }
            out_data[(y * w + x) as usize] = acc;
        }
    }
    out
}

/// Grow the mask: `iterations` passes of 3×3 neighborhood max
pub fn dilate(mask: &GrayImage, iterations: u32) -> GrayImage {
    if iterations == 0 {
        return mask.clone();
    }
    let (w, h) = mask.dimensions();
    let Some(window) = foreground_window(mask) else {
        return mask.clone();
    };
    let window = expand_window(window, iterations, w, h);

    let mut current = mask.clone();
    for _ in 0..iterations {
        current = neighborhood_pass(&current, window, NeighborhoodOp::Max);
    }
    current
}

/// Shrink the mask: `iterations` passes of 3×3 neighborhood min
pub fn erode(mask: &GrayImage, iterations: u32) -> GrayImage {
    if iterations == 0 {
        return mask.clone();
    }
    let Some(window) = foreground_window(mask) else {
        return mask.clone();
    };

    let mut current = mask.clone();
    for _ in 0..iterations {
        current = neighborhood_pass(&current, window, NeighborhoodOp::Min);
    }
    current
}

/// Morphological closing: dilate then erode by the same amount
pub fn close(mask: &GrayImage, iterations: u32) -> GrayImage {
    erode(&dilate(mask, iterations), iterations)
}

/// Dilation as a pipeline filter
#[derive(Debug, Clone, Copy)]
pub struct DilateFilter {
    pub iterations: u32,
}

impl MaskFilter for DilateFilter {
    fn apply(&self, mask: &GrayImage) -> Result<GrayImage> {
        Ok(dilate(mask, self.iterations))
    }
}

/// Erosion as a pipeline filter
#[derive(Debug, Clone, Copy)]
pub struct ErodeFilter {
    pub iterations: u32,
}

impl MaskFilter for ErodeFilter {
    fn apply(&self, mask: &GrayImage) -> Result<GrayImage> {
        Ok(erode(mask, self.iterations))
    }
}

/// Closing as a pipeline filter
#[derive(Debug, Clone, Copy)]
pub struct CloseFilter {
    pub iterations: u32,
}

impl MaskFilter for CloseFilter {
    fn apply(&self, mask: &GrayImage) -> Result<GrayImage> {
        Ok(close(mask, self.iterations))
    }
}
