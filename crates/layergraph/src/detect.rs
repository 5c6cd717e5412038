//! Typed inputs handed over by the detection collaborators.
//!
//! The detectors themselves live outside this crate; these are the shapes
//! they produce. Segmentation masks arrive as raw JSON because either RLE
//! wire form (or garbage) may show up; normalization happens at layer
//! creation and never fails.

use layerkit_common::BBox;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantNames};

/// Granularity of an OCR text block
#[derive(
    Debug, Clone, Copy, Default,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, VariantNames, IntoStaticStr,
    PartialEq, Eq
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TextGranularity {
    Word,
    Line,
    Paragraph,
    #[default]
    Block,
}

/// One detected text block from the OCR collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OcrBlock {
    pub text: String,
    pub bbox: BBox,
    pub confidence: f32,
    #[serde(default)]
    pub granularity: TextGranularity,
    #[serde(default)]
    pub language: Option<String>,
}

/// One detected object from the segmentation collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationDetection {
    /// Mask in either RLE wire form; normalized on ingest
    pub mask: serde_json::Value,
    pub bbox: BBox,
    pub confidence: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ocr_block_defaults() {
        let block: OcrBlock = serde_json::from_value(json!({
            "text": "STOP",
            "bbox": {"x": 10.0, "y": 20.0, "width": 80.0, "height": 40.0},
            "confidence": 0.98
        }))
        .unwrap();
        assert_eq!(block.granularity, TextGranularity::Block);
        assert!(block.language.is_none());
    }

    #[test]
    fn test_granularity_names() {
        assert_eq!(TextGranularity::Paragraph.to_string(), "paragraph");
        assert_eq!(
            serde_json::to_value(TextGranularity::Line).unwrap(),
            json!("line")
        );
    }
}
