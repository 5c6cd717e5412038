//! Layer metadata: the base fields every layer carries plus the
//! kind-specific attributes, modeled as a sum type tagged on `type`.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use layerkit_common::{BBox, PixelSize, Transform};
use mask::Rle;
use region::FillMethod;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantNames};

use crate::detect::TextGranularity;
use crate::history::HistoryLog;

/// Unique, monotonically issued layer identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct LayerId(pub u64);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer-{}", self.0)
    }
}

/// Identifier of a layer graph
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct GraphId(pub u64);

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "graph-{}", self.0)
    }
}

/// Compositing blend mode
#[derive(
    Debug, Clone, Copy, Default,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, VariantNames, IntoStaticStr,
    PartialEq, Eq
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
}

/// Which model produced a layer and with what parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceAttribution {
    pub model: String,
    pub version: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

impl SourceAttribution {
    pub fn new(model: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            version: version.into(),
            params: serde_json::Value::Null,
        }
    }
}

/// Estimated font metrics for a text layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FontMetrics {
    pub size_px: f64,
    /// True when derived from the bbox rather than measured
    pub estimated: bool,
}

/// Baseline geometry of a text block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextGeometry {
    pub baseline: f64,
    pub ascent: f64,
    pub descent: f64,
    pub angle: f64,
}

/// Text-layer attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextAttrs {
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
    pub granularity: TextGranularity,
    pub font: FontMetrics,
    pub geometry: TextGeometry,
}

/// A prompt the segmentation collaborator was driven with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "params", rename_all = "snake_case")]
pub enum SegmentationPrompt {
    Mask { rle: Rle },
    Point { x: f64, y: f64 },
    Box { bbox: BBox },
}

/// Object-layer attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectAttrs {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub prompts: Vec<SegmentationPrompt>,
    /// Free-form semantic attributes ("color" -> "red", ...)
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

/// Background-layer attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundAttrs {
    /// Digest of the source image descriptor
    pub content_hash: String,
    /// Layers logically carved out of the background
    pub excluded_layers: Vec<LayerId>,
    pub fill: FillMethod,
}

/// Kind-specific layer metadata, tagged on `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerKind {
    Text(TextAttrs),
    Object(ObjectAttrs),
    Background(BackgroundAttrs),
}

impl LayerKind {
    pub fn is_background(&self) -> bool {
        matches!(self, LayerKind::Background(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            LayerKind::Text(_) => "text",
            LayerKind::Object(_) => "object",
            LayerKind::Background(_) => "background",
        }
    }
}

/// A single layer of the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    #[serde(flatten)]
    pub kind: LayerKind,
    pub visible: bool,
    pub locked: bool,
    pub opacity: f64,
    pub blend_mode: BlendMode,
    pub z_index: i32,
    pub bbox: BBox,
    #[serde(default)]
    pub mask: Option<Rle>,
    pub area_pct: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Placement at creation time; never mutated afterwards
    pub original_transform: Transform,
    pub current_transform: Transform,
    pub source: SourceAttribution,
    #[serde(default)]
    pub confidence: Option<f32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub history: HistoryLog,
}

impl Layer {
    /// The bbox as currently placed: `bbox` mapped through `current_transform`
    pub fn effective_bbox(&self) -> BBox {
        self.current_transform.rect_to_surface(&self.bbox)
    }

    /// Recompute `area_pct` from the effective bbox against the image area
    pub fn recompute_area_pct(&mut self, image: PixelSize) {
        let image_area = image.area() as f64;
        if image_area <= 0.0 {
            self.area_pct = 0.0;
            return;
        }
        self.area_pct = 100.0 * self.effective_bbox().area() / image_area;
    }

    /// Append a history entry and bump `updated_at`
    pub fn record(
        &mut self,
        operation: impl Into<String>,
        params: serde_json::Value,
        timestamp: DateTime<Utc>,
    ) {
        self.history.record(operation, params, timestamp);
        self.updated_at = timestamp;
    }
}
