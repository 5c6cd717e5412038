//! # Pixel Region Extraction and Hole Filling
//!
//! Non-destructive region operations over RGBA rasters: pulling a masked
//! rectangle out of a source image for independent display, patching the
//! vacated area so it still reads as background, and rescaling extractions
//! to the viewer's display scale.
//!
//! Extraction never destroys data: alpha is zeroed outside the mask while
//! RGB survives underneath, so a region can be recovered or repositioned
//! losslessly. Out-of-range rectangles clamp; nothing here returns an error.

pub mod blur;
pub mod extract;
pub mod fill;
pub mod scale;

pub use blur::{box_blur, MAX_BLUR_RADIUS, MIN_BLUR_RADIUS};
pub use extract::{extract_region, ExtractedRegion};
pub use fill::{fill_hole, FillMethod};
pub use scale::scale_raster;
