pub mod feather;
pub mod morphology;
pub mod smoothing;

pub use feather::{feather, FeatherFilter};
pub use morphology::{close, dilate, erode, CloseFilter, DilateFilter, ErodeFilter};
pub use smoothing::{BinarizeFilter, SmoothFilter};
