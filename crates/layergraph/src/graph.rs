//! Graph state: the source descriptor, the layer map, and adjacency.

use std::collections::BTreeMap;

use layerkit_common::{PixelSize, Transform};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantNames};

use crate::meta::{GraphId, Layer, LayerId};

/// Descriptor of the loaded source image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub hash: String,
}

impl SourceImage {
    pub fn pixel_size(&self) -> PixelSize {
        PixelSize::new(self.width, self.height)
    }
}

/// Export file format
#[derive(
    Debug, Clone, Copy, Default,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, VariantNames, IntoStaticStr,
    PartialEq, Eq
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
    Webp,
}

/// Graph export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportSettings {
    pub format: ExportFormat,
    pub quality: u8,
    pub include_metadata: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            format: ExportFormat::Png,
            quality: 92,
            include_metadata: true,
        }
    }
}

/// The non-destructive layer graph for one loaded source image.
///
/// Exactly one background layer exists from initialization on and is never
/// removed. The ordered map keeps layer ids unique; `children` is the
/// parent→children adjacency with the background as root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayerGraph {
    pub id: GraphId,
    pub name: String,
    pub source_image: SourceImage,
    pub layers: BTreeMap<LayerId, Layer>,
    pub background_id: LayerId,
    pub children: BTreeMap<LayerId, Vec<LayerId>>,
    pub canvas_transform: Transform,
    pub export_settings: ExportSettings,
}

impl LayerGraph {
    pub fn contains(&self, id: LayerId) -> bool {
        self.layers.contains_key(&id)
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(&id)
    }

    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.get_mut(&id)
    }

    /// All layers in stable compositing order: ascending z, ties by id
    pub fn layers_by_z(&self) -> Vec<&Layer> {
        let mut layers: Vec<&Layer> = self.layers.values().collect();
        layers.sort_by_key(|layer| (layer.z_index, layer.id));
        layers
    }

    /// The z-index a newly created layer gets
    pub fn next_z_index(&self) -> i32 {
        self.layers
            .values()
            .map(|layer| layer.z_index)
            .max()
            .map_or(0, |z| z + 1)
    }

    /// Attach a layer under a parent in the adjacency map
    pub(crate) fn attach(&mut self, parent: LayerId, child: LayerId) {
        self.children.entry(parent).or_default().push(child);
    }
}
