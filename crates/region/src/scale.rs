//! Raster rescaling for display.

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Resample a raster by a scalar factor with Catmull-Rom interpolation.
///
/// Output dimensions round and floor at 1. A non-positive or non-finite
/// factor returns the input unchanged; extraction results are never
/// invalidated by a bad caller value.
pub fn scale_raster(raster: &RgbaImage, factor: f64) -> RgbaImage {
    if !factor.is_finite() || factor <= 0.0 {
        return raster.clone();
    }
    let width = ((raster.width() as f64 * factor).round() as u32).max(1);
    let height = ((raster.height() as f64 * factor).round() as u32).max(1);
    if (width, height) == raster.dimensions() {
        return raster.clone();
    }
    imageops::resize(raster, width, height, FilterType::CatmullRom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_scale_dimensions_round() {
        let img = RgbaImage::from_pixel(10, 7, Rgba([1, 2, 3, 255]));
        let out = scale_raster(&img, 1.5);
        assert_eq!(out.dimensions(), (15, 11));
    }

    #[test]
    fn test_scale_floors_at_one_pixel() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));
        let out = scale_raster(&img, 0.01);
        assert_eq!(out.dimensions(), (1, 1));
    }

    #[test]
    fn test_unit_and_degenerate_factors_are_identity() {
        let img = RgbaImage::from_pixel(6, 6, Rgba([9, 9, 9, 255]));
        assert_eq!(scale_raster(&img, 1.0).as_raw(), img.as_raw());
        assert_eq!(scale_raster(&img, 0.0).as_raw(), img.as_raw());
        assert_eq!(scale_raster(&img, f64::NAN).as_raw(), img.as_raw());
    }

    #[test]
    fn test_upscale_preserves_flat_color() {
        let img = RgbaImage::from_pixel(5, 5, Rgba([100, 150, 200, 255]));
        let out = scale_raster(&img, 2.0);
        assert_eq!(out.dimensions(), (10, 10));
        assert!(out.pixels().all(|px| px.0 == [100, 150, 200, 255]));
    }
}
