use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

use crate::{
    algorithms::{
        BinarizeFilter, CloseFilter, DilateFilter, ErodeFilter, FeatherFilter, SmoothFilter,
    },
    codec::{decode, encode},
    error::Result,
    pipeline::RefinePipeline,
    traits::MaskFilter,
    types::Rle,
};

/// Serializable mask refinement command.
///
/// The command vocabulary lets a config file or collaborator describe a
/// refinement chain without touching filter types directly.
#[derive(
    Debug, Clone,
    Serialize, Deserialize, JsonSchema,
    Display, IntoStaticStr,
    PartialEq
)]
#[serde(tag = "type", content = "params", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RefineOp {
    /// Grow the mask by n 3×3 max passes
    Dilate { iterations: u32 },

    /// Shrink the mask by n 3×3 min passes
    Erode { iterations: u32 },

    /// Dilate then erode, filling pinholes
    Close { iterations: u32 },

    /// Soften the edge over a pixel radius
    Feather { radius: u32 },

    /// Gaussian denoise
    Smooth { sigma: f32 },

    /// Hard re-binarization
    Binarize { threshold: u8 },
}

impl RefineOp {
    /// Instantiate the filter backing this command
    pub fn to_filter(&self) -> Box<dyn MaskFilter> {
        match *self {
            RefineOp::Dilate { iterations } => Box::new(DilateFilter { iterations }),
            RefineOp::Erode { iterations } => Box::new(ErodeFilter { iterations }),
            RefineOp::Close { iterations } => Box::new(CloseFilter { iterations }),
            RefineOp::Feather { radius } => Box::new(FeatherFilter { radius }),
            RefineOp::Smooth { sigma } => Box::new(SmoothFilter { sigma }),
            RefineOp::Binarize { threshold } => Box::new(BinarizeFilter { threshold }),
        }
    }

    /// Apply this single command to an RLE mask
    pub fn apply(&self, rle: &Rle) -> Result<Rle> {
        let refined = self.to_filter().apply(&decode(rle))?;
        Ok(encode(&refined))
    }

    /// Build a pipeline from a command sequence and run it
    pub fn apply_all(ops: &[RefineOp], rle: &Rle) -> Result<Rle> {
        if ops.is_empty() {
            return Ok(rle.clone());
        }
        let pipeline = RefinePipeline::new(ops.iter().map(|op| op.to_filter()).collect());
        pipeline.process_rle(rle)
    }
}
