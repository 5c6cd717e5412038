use crate::{
    algorithms::{
        BinarizeFilter, CloseFilter, DilateFilter, ErodeFilter, FeatherFilter, SmoothFilter,
    },
    pipeline::RefinePipeline,
    traits::MaskFilter,
};

/// Builder for refinement pipelines with a fluent API
pub struct RefinePipelineBuilder {
    filters: Vec<Box<dyn MaskFilter>>,
}

impl RefinePipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add an arbitrary filter to the chain
    pub fn add_filter<F>(mut self, filter: F) -> Self
    where
        F: MaskFilter + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    /// Add a dilation step
    pub fn with_dilate(self, iterations: u32) -> Self {
        self.add_filter(DilateFilter { iterations })
    }

    /// Add an erosion step
    pub fn with_erode(self, iterations: u32) -> Self {
        self.add_filter(ErodeFilter { iterations })
    }

    /// Add a closing step
    pub fn with_close(self, iterations: u32) -> Self {
        self.add_filter(CloseFilter { iterations })
    }

    /// Add an edge-feathering step
    pub fn with_feather(self, radius: u32) -> Self {
        self.add_filter(FeatherFilter { radius })
    }

    /// Add a Gaussian smoothing step
    pub fn with_smoothing(self, sigma: f32) -> Self {
        self.add_filter(SmoothFilter { sigma })
    }

    /// Add a hard re-binarization step
    pub fn with_binarize(self, threshold: u8) -> Self {
        self.add_filter(BinarizeFilter { threshold })
    }

    /// Build the pipeline
    pub fn build(self) -> RefinePipeline {
        RefinePipeline::new(self.filters)
    }

    /// Build a denoise-and-close pipeline, the usual cleanup for detector masks
    pub fn build_cleanup(iterations: u32) -> RefinePipeline {
        Self::new()
            .with_smoothing(1.0)
            .with_binarize(128)
            .with_close(iterations)
            .build()
    }

    /// Build a soft-edge pipeline
    pub fn build_feathered(radius: u32) -> RefinePipeline {
        Self::new().with_feather(radius).build()
    }
}

impl Default for RefinePipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
