//! Background patching for vacated regions.

use image::imageops;
use image::{Rgba, RgbaImage};
use layerkit_common::{BBox, PixelSize};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};
use tracing::debug;

use crate::blur::box_blur;
use crate::extract::extract_region;

/// How to patch the hole a layer leaves behind
#[derive(
    Debug, Clone,
    Serialize, Deserialize, JsonSchema,
    Display, IntoStaticStr,
    PartialEq
)]
#[serde(tag = "type", content = "params", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FillMethod {
    /// Clear the rect to zero alpha
    Transparent,

    /// Box-blur the rect in place so it reads as plausible background
    Blur { radius: u32 },

    /// Flat fill
    Color { rgba: [u8; 4] },
}

impl Default for FillMethod {
    fn default() -> Self {
        FillMethod::Transparent
    }
}

/// Patch a rectangle of the source in place.
///
/// The rect clamps to the source bounds; a fully out-of-range rect is a
/// no-op. `Blur` extracts the rect, blurs it, and writes it back.
pub fn fill_hole(source: &mut RgbaImage, bbox: &BBox, method: &FillMethod) {
    let bounds = PixelSize::new(source.width(), source.height());
    let clamped = bbox.clamp_to(bounds);
    let Some((x, y, w, h)) = clamped.to_pixel_rect() else {
        return;
    };
    let w = w.min(bounds.width - x.min(bounds.width));
    let h = h.min(bounds.height - y.min(bounds.height));
    if w == 0 || h == 0 {
        return;
    }
    debug!(%method, x, y, w, h, "filling hole");

    match method {
        FillMethod::Transparent => {
            for yy in y..(y + h) {
                for xx in x..(x + w) {
                    source.get_pixel_mut(xx, yy)[3] = 0;
                }
            }
        }
        FillMethod::Color { rgba } => {
            for yy in y..(y + h) {
                for xx in x..(x + w) {
                    source.put_pixel(xx, yy, Rgba(*rgba));
                }
            }
        }
        FillMethod::Blur { radius } => {
            let region = extract_region(source, &clamped, None);
            if region.is_empty() {
                return;
            }
            let blurred = box_blur(&region.raster, *radius);
            imageops::replace(source, &blurred, region.bbox.x as i64, region.bbox.y as i64);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: u32, h: u32, value: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba(value))
    }

    #[test]
    fn test_transparent_clears_alpha_only() {
        let mut img = solid(10, 10, [40, 50, 60, 255]);
        fill_hole(&mut img, &BBox::new(2.0, 2.0, 4.0, 4.0), &FillMethod::Transparent);

        let cleared = img.get_pixel(3, 3);
        assert_eq!(cleared[3], 0);
        assert_eq!(cleared[0], 40, "RGB is retained");
        assert_eq!(img.get_pixel(0, 0)[3], 255, "outside the rect untouched");
    }

    #[test]
    fn test_color_fill_is_flat() {
        let mut img = solid(10, 10, [0, 0, 0, 255]);
        fill_hole(
            &mut img,
            &BBox::new(1.0, 1.0, 3.0, 3.0),
            &FillMethod::Color { rgba: [9, 8, 7, 255] },
        );
        assert_eq!(img.get_pixel(2, 2).0, [9, 8, 7, 255]);
        assert_eq!(img.get_pixel(5, 5).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_blur_fill_is_noop_on_uniform_region() {
        let mut img = solid(20, 20, [255, 255, 255, 255]);
        let bbox = BBox::new(4.0, 4.0, 8.0, 8.0);
        fill_hole(&mut img, &bbox, &FillMethod::Blur { radius: 6 });

        let region = extract_region(&img, &bbox, None);
        assert!(region
            .raster
            .pixels()
            .all(|px| px.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_out_of_range_rect_is_noop() {
        let mut img = solid(10, 10, [1, 2, 3, 255]);
        let before = img.clone();
        fill_hole(&mut img, &BBox::new(50.0, 50.0, 5.0, 5.0), &FillMethod::Transparent);
        assert_eq!(img.as_raw(), before.as_raw());
    }

    #[test]
    fn test_fill_method_wire_form() {
        let value = serde_json::to_value(FillMethod::Blur { radius: 6 }).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type": "blur", "params": {"radius": 6}})
        );
        assert_eq!(FillMethod::default(), FillMethod::Transparent);
    }
}
