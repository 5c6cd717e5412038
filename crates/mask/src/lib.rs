//! # RLE Mask Codec and Refinement
//!
//! Lossless run-length mask compression plus morphological refinement for
//! the non-destructive layer editor. Masks travel as canonical alternating
//! runs (`{counts, size}`, background first, summing to `width * height`);
//! refinement decodes to an alpha raster, filters, and re-encodes.
//!
//! ## Core Features
//!
//! - **Tolerant codec**: accepts the canonical and the legacy
//!   `{width, height, runs}` wire forms; malformed input degrades to a 1×1
//!   empty mask instead of failing layer creation.
//! - **Trait-based filters**: dilate/erode/close/feather (plus Gaussian
//!   smoothing and re-binarization) behind the [`MaskFilter`] seam.
//! - **Pipeline system**: compose filter chains with a fluent builder.
//! - **Bounded cost**: morphology and feathering iterate the foreground
//!   bounding box, not the raster.
//!
//! ## Quick Start
//!
//! ```rust
//! use mask::{codec, RefinePipeline, Rle};
//!
//! let rle = Rle::new(vec![24, 1, 24], 7, 7);
//! let pipeline = RefinePipeline::builder()
//!     .with_dilate(1)
//!     .with_feather(2)
//!     .build();
//! let softened = pipeline.process_rle(&rle)?;
//! assert_eq!(softened.size, rle.size);
//! # Ok::<(), mask::MaskError>(())
//! ```

// Core modules
pub mod algorithms;
pub mod codec;
pub mod error;
pub mod io;
pub mod ops;
pub mod pipeline;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use algorithms::*;
pub use error::{MaskError, Result};
pub use ops::RefineOp;
pub use pipeline::{builder::RefinePipelineBuilder, RefinePipeline};
pub use traits::MaskFilter;
pub use types::{LegacyRle, LegacyRun, MaskEncoding, Rle};

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn create_test_mask() -> GrayImage {
        let mut img = GrayImage::new(32, 32);
        for y in 8..24 {
            for x in 8..24 {
                img.put_pixel(x, y, Luma([255u8]));
            }
        }
        img
    }

    #[test]
    fn test_codec_round_trip_through_pipeline() {
        let raster = create_test_mask();
        let rle = codec::encode(&raster);
        assert!(rle.is_consistent());

        let refined = RefinePipeline::builder()
            .with_close(2)
            .build()
            .process_rle(&rle)
            .expect("Should refine");

        // Closing a solid block changes nothing
        assert_eq!(refined, rle);
    }

    #[test]
    fn test_ops_and_builder_agree() {
        let rle = codec::encode(&create_test_mask());

        let via_ops = RefineOp::apply_all(
            &[
                RefineOp::Dilate { iterations: 1 },
                RefineOp::Erode { iterations: 1 },
            ],
            &rle,
        )
        .expect("Should refine");

        let via_builder = RefinePipeline::builder()
            .with_dilate(1)
            .with_erode(1)
            .build()
            .process_rle(&rle)
            .expect("Should refine");

        assert_eq!(via_ops, via_builder);
    }

    #[test]
    fn test_sum_invariant_held_by_every_op() {
        let rle = codec::encode(&create_test_mask());
        for op in [
            RefineOp::Dilate { iterations: 2 },
            RefineOp::Erode { iterations: 2 },
            RefineOp::Close { iterations: 1 },
            RefineOp::Feather { radius: 3 },
            RefineOp::Smooth { sigma: 0.8 },
            RefineOp::Binarize { threshold: 64 },
        ] {
            let out = op.apply(&rle).expect("Should apply");
            assert!(out.is_consistent(), "{op} broke the sum invariant");
        }
    }
}
