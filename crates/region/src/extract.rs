//! Non-destructive region extraction.

use image::imageops::{self, FilterType};
use image::{GrayImage, RgbaImage};
use layerkit_common::{BBox, PixelSize};
use mask::{codec, Rle};

/// A region pulled out of a source raster for independent display
#[derive(Debug, Clone)]
pub struct ExtractedRegion {
    /// The extracted pixels; RGB survives under zeroed alpha
    pub raster: RgbaImage,
    /// The clamped, pixel-aligned rectangle the raster was read from
    pub bbox: BBox,
    /// The mask actually applied, re-encoded at the region's size
    pub mask: Option<Rle>,
}

impl ExtractedRegion {
    /// Whether clamping collapsed the region to nothing
    pub fn is_empty(&self) -> bool {
        self.raster.width() == 0 || self.raster.height() == 0
    }
}

/// Pixel-align a clamped box, guarding the rounding against the source edge
fn pixel_rect(clamped: &BBox, bounds: PixelSize) -> Option<(u32, u32, u32, u32)> {
    let (x, y, w, h) = clamped.to_pixel_rect()?;
    let x = x.min(bounds.width);
    let y = y.min(bounds.height);
    let w = w.min(bounds.width - x);
    let h = h.min(bounds.height - y);
    (w > 0 && h > 0).then_some((x, y, w, h))
}

/// Extract a rectangular region, optionally restricted by a mask.
///
/// The bbox clamps to the source bounds; a fully out-of-range request
/// yields a zero-size region rather than an error. A mask whose dimensions
/// differ from the clamped rect is nearest-neighbor-resized first. Masked
/// pixels keep their RGB with alpha zeroed, so the content under the mask
/// remains recoverable.
pub fn extract_region(source: &RgbaImage, bbox: &BBox, mask: Option<&Rle>) -> ExtractedRegion {
    let bounds = PixelSize::new(source.width(), source.height());
    let clamped = bbox.clamp_to(bounds);
    let Some((x, y, w, h)) = pixel_rect(&clamped, bounds) else {
        return ExtractedRegion {
            raster: RgbaImage::new(0, 0),
            bbox: BBox::new(clamped.x, clamped.y, 0.0, 0.0),
            mask: None,
        };
    };

    let mut raster = imageops::crop_imm(source, x, y, w, h).to_image();

    let mask_raster: Option<GrayImage> = mask.map(|rle| {
        let decoded = codec::decode(rle);
        if decoded.dimensions() == (w, h) {
            decoded
        } else {
            imageops::resize(&decoded, w, h, FilterType::Nearest)
        }
    });

    if let Some(alpha) = &mask_raster {
        for (px_x, px_y, pixel) in raster.enumerate_pixels_mut() {
            if alpha.get_pixel(px_x, px_y)[0] == 0 {
                pixel[3] = 0;
            }
        }
    }

    ExtractedRegion {
        raster,
        bbox: BBox::new(x as f64, y as f64, w as f64, h as f64),
        mask: mask_raster.as_ref().map(codec::encode),
    }
}
