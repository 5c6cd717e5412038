//! Lossless RLE codec over alpha rasters.
//!
//! Encoding scans row-major, classifies each pixel against an alpha
//! threshold, and emits a run length on every change of value with an
//! implicit background start. Decoding is tolerant: run sums longer than the
//! declared raster truncate, shorter sums leave the remainder background.

use image::GrayImage;

use crate::types::Rle;

/// Alpha classification threshold: `alpha > 128` is foreground
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 128;

/// Encode an alpha raster with the default threshold
pub fn encode(raster: &GrayImage) -> Rle {
    encode_with_threshold(raster, DEFAULT_ALPHA_THRESHOLD)
}

/// Encode an alpha raster into canonical alternating runs.
///
/// A raster whose first pixel classifies as foreground yields a leading
/// zero background count.
pub fn encode_with_threshold(raster: &GrayImage, threshold: u8) -> Rle {
    let (width, height) = raster.dimensions();
    if width == 0 || height == 0 {
        return Rle::empty();
    }

    let mut counts: Vec<u32> = Vec::new();
    let mut previous = 0u8;
    let mut run = 0u32;

    for &alpha in raster.as_raw() {
        let value = u8::from(alpha > threshold);
        if value != previous {
            counts.push(run);
            run = 0;
            previous = value;
        }
        run += 1;
    }
    counts.push(run);

    Rle::new(counts, width, height)
}

/// Decode an RLE mask into a full alpha raster.
///
/// Foreground runs write 255, background runs 0.
pub fn decode(rle: &Rle) -> GrayImage {
    let (width, height) = (rle.width(), rle.height());
    if width == 0 || height == 0 {
        return GrayImage::new(1, 1);
    }

    let mut raster = GrayImage::new(width, height);
    let len = raster.len();
    {
        let data: &mut [u8] = &mut raster;
        let mut cursor = 0usize;
        let mut foreground = false;
        for &count in &rle.counts {
            let end = cursor.saturating_add(count as usize).min(len);
            if foreground {
                data[cursor..end].fill(255);
            }
            cursor = end;
            foreground = !foreground;
            if cursor >= len {
                break;
            }
        }
    }
    raster
}
