use image::GrayImage;

use crate::error::Result;

/// Trait for filters over decoded mask rasters
pub trait MaskFilter: Send + Sync {
    /// Apply the filter, returning a new raster of the same dimensions
    fn apply(&self, mask: &GrayImage) -> Result<GrayImage>;
}
