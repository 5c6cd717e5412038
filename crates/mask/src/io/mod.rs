//! Raster mask import/export.
//!
//! The editor's wire format is canonical RLE; some collaborators hand masks
//! over as base64-encoded PNG rasters instead. That encoding stays strictly
//! an io concern: it is decoded here and normalized to RLE at the boundary.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::GrayImage;

use crate::{
    codec::encode,
    error::Result,
    types::Rle,
};

/// Decode a base64 PNG (optionally a `data:` url) into an alpha raster
pub fn raster_from_base64_png(data: &str) -> Result<GrayImage> {
    let payload = match data.split_once(',') {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => data,
    };
    let bytes = STANDARD.decode(payload.trim())?;
    let img = image::load_from_memory(&bytes)?;
    Ok(img.to_luma8())
}

/// Encode an alpha raster as a base64 PNG string
pub fn raster_to_base64_png(mask: &GrayImage) -> Result<String> {
    let mut buffer = Cursor::new(Vec::new());
    mask.write_to(&mut buffer, image::ImageFormat::Png)?;
    Ok(STANDARD.encode(buffer.into_inner()))
}

/// Import a base64 PNG mask directly to canonical RLE
pub fn rle_from_base64_png(data: &str) -> Result<Rle> {
    Ok(encode(&raster_from_base64_png(data)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_png_base64_round_trip() {
        let mut img = GrayImage::new(4, 4);
        for y in 1..3 {
            for x in 1..3 {
                img.put_pixel(x, y, Luma([255u8]));
            }
        }

        let encoded = raster_to_base64_png(&img).expect("Should encode");
        let decoded = raster_from_base64_png(&encoded).expect("Should decode");
        assert_eq!(decoded.as_raw(), img.as_raw());
    }

    #[test]
    fn test_data_url_prefix_accepted() {
        let mut img = GrayImage::new(2, 2);
        img.put_pixel(0, 0, Luma([255u8]));
        let encoded = raster_to_base64_png(&img).expect("Should encode");
        let url = format!("data:image/png;base64,{encoded}");

        let rle = rle_from_base64_png(&url).expect("Should import");
        assert_eq!(rle.size, [2, 2]);
        assert_eq!(rle.counts, vec![0, 1, 3]);
    }

    #[test]
    fn test_invalid_base64_is_an_error() {
        assert!(raster_from_base64_png("not-base64!!!").is_err());
    }
}
