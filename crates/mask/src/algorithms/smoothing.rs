use image::GrayImage;
use imageproc::contrast::{threshold, ThresholdType};
use imageproc::filter::gaussian_blur_f32;

use crate::error::Result;
use crate::traits::MaskFilter;

/// Gaussian smoothing for mask denoising before morphology
#[derive(Debug, Clone, Copy)]
pub struct SmoothFilter {
    pub sigma: f32,
}

impl Default for SmoothFilter {
    fn default() -> Self {
        Self { sigma: 1.0 }
    }
}

impl MaskFilter for SmoothFilter {
    fn apply(&self, mask: &GrayImage) -> Result<GrayImage> {
        if self.sigma <= 0.0 {
            return Ok(mask.clone());
        }
        Ok(gaussian_blur_f32(mask, self.sigma))
    }
}

/// Hard re-binarization, typically after smoothing or feathering
#[derive(Debug, Clone, Copy)]
pub struct BinarizeFilter {
    pub threshold: u8,
}

impl Default for BinarizeFilter {
    fn default() -> Self {
        Self { threshold: 128 }
    }
}

impl MaskFilter for BinarizeFilter {
    fn apply(&self, mask: &GrayImage) -> Result<GrayImage> {
        Ok(threshold(mask, self.threshold, ThresholdType::Binary))
    }
}
