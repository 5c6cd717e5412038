pub mod builder;

use image::GrayImage;
use tracing::debug;

use crate::{
    codec::{decode, encode},
    error::Result,
    traits::MaskFilter,
    types::Rle,
};

/// A composable chain of mask refinement filters
pub struct RefinePipeline {
    filters: Vec<Box<dyn MaskFilter>>,
}

impl RefinePipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::RefinePipelineBuilder {
        builder::RefinePipelineBuilder::new()
    }

    /// Create a pipeline from an explicit filter chain
    pub fn new(filters: Vec<Box<dyn MaskFilter>>) -> Self {
        Self { filters }
    }

    /// Number of filters in the chain
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run every filter in sequence over a decoded raster
    pub fn process(&self, mask: &GrayImage) -> Result<GrayImage> {
        let mut current = mask.clone();
        for filter in &self.filters {
            current = filter.apply(&current)?;
        }
        Ok(current)
    }

    /// Decode, refine, and re-encode an RLE mask
    pub fn process_rle(&self, rle: &Rle) -> Result<Rle> {
        debug!(filters = self.filters.len(), size = ?rle.size, "refining mask");
        let refined = self.process(&decode(rle))?;
        Ok(encode(&refined))
    }
}
