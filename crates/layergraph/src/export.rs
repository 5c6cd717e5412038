//! Graph serialization for export.
//!
//! The layer map and adjacency flatten to ordered entry lists so the wire
//! form is stable and invertible; import is a consumer concern.

use chrono::{DateTime, Utc};
use layerkit_common::Transform;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{ExportSettings, LayerGraph, SourceImage};
use crate::meta::{GraphId, Layer, LayerId};

/// The exported form of a whole layer graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GraphExport {
    pub id: GraphId,
    pub name: String,
    pub source_image: SourceImage,
    /// `[id, meta]` entries in ascending id order
    pub layers: Vec<(LayerId, Layer)>,
    /// `[parentId, [childIds]]` entries in ascending parent order
    pub children: Vec<(LayerId, Vec<LayerId>)>,
    pub canvas_transform: Transform,
    pub export_settings: ExportSettings,
    pub exported_at: DateTime<Utc>,
}

impl GraphExport {
    /// Flatten a graph into its export form
    pub fn from_graph(graph: &LayerGraph, exported_at: DateTime<Utc>) -> Self {
        Self {
            id: graph.id,
            name: graph.name.clone(),
            source_image: graph.source_image.clone(),
            layers: graph
                .layers
                .iter()
                .map(|(id, layer)| (*id, layer.clone()))
                .collect(),
            children: graph
                .children
                .iter()
                .map(|(parent, children)| (*parent, children.clone()))
                .collect(),
            canvas_transform: graph.canvas_transform,
            export_settings: graph.export_settings.clone(),
            exported_at,
        }
    }

    /// Serialize to a JSON value
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize to a pretty JSON string
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{OcrBlock, TextGranularity};
    use crate::manager::{Clock, ContentHasher, LayerGraphManager};
    use chrono::TimeZone;
    use layerkit_common::{BBox, PixelSize};

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.timestamp_opt(1_700_000_000, 0).unwrap()
        }
    }

    struct FixedHasher;

    impl ContentHasher for FixedHasher {
        fn digest(&self, _bytes: &[u8]) -> String {
            "cafebabe".into()
        }
    }

    fn populated_export() -> GraphExport {
        let mut manager =
            LayerGraphManager::with_collaborators(Box::new(FixedHasher), Box::new(FixedClock));
        manager
            .initialize_from_image("https://cdn.example/img.png", PixelSize::new(640, 480))
            .unwrap();
        manager
            .create_text_layer(
                &OcrBlock {
                    text: "sale".into(),
                    bbox: BBox::new(12.0, 16.0, 120.0, 40.0),
                    confidence: 0.91,
                    granularity: TextGranularity::Line,
                    language: None,
                },
                Default::default(),
            )
            .unwrap();
        manager.export_to_json().unwrap()
    }

    #[test]
    fn test_export_envelope_shape() {
        let value = populated_export().to_value().unwrap();
        assert_eq!(value["sourceImage"]["width"], 640);
        assert_eq!(value["sourceImage"]["hash"], "cafebabe");
        assert!(value["layers"].is_array());
        assert_eq!(value["layers"].as_array().unwrap().len(), 2);
        // Entries are [id, meta] pairs
        assert_eq!(value["layers"][0][0], 1);
        assert_eq!(value["layers"][0][1]["type"], "background");
        assert!(value["canvasTransform"]["offsetX"].is_number());
        assert!(value["exportedAt"].is_string());
        assert_eq!(value["exportSettings"]["format"], "png");
    }

    #[test]
    fn test_export_round_trips_through_serde() {
        let export = populated_export();
        let json = export.to_json_string().unwrap();
        let back: GraphExport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, export);
    }

    #[test]
    fn test_children_flatten_in_parent_order() {
        let export = populated_export();
        assert_eq!(export.children.len(), 1);
        let (parent, children) = &export.children[0];
        assert_eq!(*parent, LayerId(1));
        assert_eq!(children, &vec![LayerId(2)]);
    }
}
