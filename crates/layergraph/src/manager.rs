//! Graph lifecycle and layer CRUD.
//!
//! The manager exclusively owns one [`LayerGraph`]. Everything is
//! synchronous; callers serialize concurrent edits externally. Operations on
//! an uninitialized graph fail hard, operations naming an unknown layer are
//! soft no-ops so the manager tolerates racy callers.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use layerkit_common::{BBox, PixelSize, Transform};
use mask::Rle;
use region::FillMethod;
use serde_json::json;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::detect::{OcrBlock, SegmentationDetection};
use crate::error::{GraphError, Result};
use crate::export::GraphExport;
use crate::graph::{ExportSettings, LayerGraph, SourceImage};
use crate::history::HistoryLog;
use crate::meta::{
    BackgroundAttrs, BlendMode, FontMetrics, GraphId, Layer, LayerId, LayerKind, ObjectAttrs,
    SegmentationPrompt, SourceAttribution, TextAttrs, TextGeometry,
};

/// Font size estimate bounds in pixels
const MIN_FONT_SIZE: f64 = 12.0;
const MAX_FONT_SIZE: f64 = 72.0;

/// Content digest collaborator, injected so tests stay deterministic
pub trait ContentHasher: Send + Sync {
    fn digest(&self, bytes: &[u8]) -> String;
}

/// SHA-256 hex digest
pub struct Sha256Hasher;

impl ContentHasher for Sha256Hasher {
    fn digest(&self, bytes: &[u8]) -> String {
        Sha256::digest(bytes)
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect()
    }
}

/// Time source collaborator
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Options for text layer creation
#[derive(Debug, Clone, Default)]
pub struct TextLayerOptions {
    pub name: Option<String>,
    pub source: Option<SourceAttribution>,
    pub tags: Vec<String>,
}

/// Options for object layer creation
#[derive(Debug, Clone, Default)]
pub struct ObjectLayerOptions {
    pub name: Option<String>,
    pub category: Option<String>,
    pub source: Option<SourceAttribution>,
    pub tags: Vec<String>,
}

/// Owner of the layer graph and the only mutation surface over it
pub struct LayerGraphManager {
    graph: Option<LayerGraph>,
    hasher: Box<dyn ContentHasher>,
    clock: Box<dyn Clock>,
    next_layer_id: u64,
    next_graph_id: u64,
}

impl LayerGraphManager {
    /// Manager with the production collaborators
    pub fn new() -> Self {
        Self::with_collaborators(Box::new(Sha256Hasher), Box::new(SystemClock))
    }

    /// Manager with injected hashing and time sources
    pub fn with_collaborators(hasher: Box<dyn ContentHasher>, clock: Box<dyn Clock>) -> Self {
        Self {
            graph: None,
            hasher,
            clock,
            next_layer_id: 1,
            next_graph_id: 1,
        }
    }

    /// The current graph, if initialized
    pub fn graph(&self) -> Option<&LayerGraph> {
        self.graph.as_ref()
    }

    fn issue_layer_id(&mut self) -> LayerId {
        let id = LayerId(self.next_layer_id);
        self.next_layer_id += 1;
        id
    }

    /// Create a fresh graph for a loaded source image.
    ///
    /// Replaces any previous graph wholesale. The content digest completes
    /// before the background layer is created.
    pub fn initialize_from_image(&mut self, url: &str, dims: PixelSize) -> Result<GraphId> {
        if dims.width == 0 || dims.height == 0 {
            return Err(GraphError::Configuration {
                width: dims.width,
                height: dims.height,
            });
        }

        let descriptor = format!("{url}:{}x{}", dims.width, dims.height);
        let hash = self.hasher.digest(descriptor.as_bytes());
        let now = self.clock.now();

        let graph_id = GraphId(self.next_graph_id);
        self.next_graph_id += 1;
        let background_id = self.issue_layer_id();

        let bbox = BBox::new(0.0, 0.0, dims.width as f64, dims.height as f64);
        let mut background = Layer {
            id: background_id,
            name: "Background".into(),
            kind: LayerKind::Background(BackgroundAttrs {
                content_hash: hash.clone(),
                excluded_layers: Vec::new(),
                fill: FillMethod::default(),
            }),
            visible: true,
            locked: false,
            opacity: 1.0,
            blend_mode: BlendMode::Normal,
            z_index: 0,
            bbox,
            mask: None,
            area_pct: 100.0,
            created_at: now,
            updated_at: now,
            original_transform: Transform::identity(),
            current_transform: Transform::identity(),
            source: SourceAttribution::new("image-loader", env!("CARGO_PKG_VERSION")),
            confidence: None,
            tags: Vec::new(),
            history: HistoryLog::new(),
        };
        background.record("create", json!({"type": "background"}), now);

        let name = url.rsplit('/').next().unwrap_or(url).to_string();
        let mut layers = BTreeMap::new();
        layers.insert(background_id, background);

        self.graph = Some(LayerGraph {
            id: graph_id,
            name,
            source_image: SourceImage {
                url: url.to_string(),
                width: dims.width,
                height: dims.height,
                hash,
            },
            layers,
            background_id,
            children: BTreeMap::new(),
            canvas_transform: Transform::identity(),
            export_settings: ExportSettings::default(),
        });

        info!(%graph_id, url, width = dims.width, height = dims.height, "graph initialized");
        Ok(graph_id)
    }

    /// Create a layer from an OCR text block
    pub fn create_text_layer(
        &mut self,
        block: &OcrBlock,
        options: TextLayerOptions,
    ) -> Result<LayerId> {
        if self.graph.is_none() {
            return Err(GraphError::NotInitialized);
        }
        let id = self.issue_layer_id();
        let now = self.clock.now();

        let font_size = (0.8 * block.bbox.height).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        let attrs = TextAttrs {
            text: block.text.clone(),
            language: block.language.clone(),
            granularity: block.granularity,
            font: FontMetrics {
                size_px: font_size,
                estimated: true,
            },
            geometry: TextGeometry {
                baseline: block.bbox.y + 0.8 * block.bbox.height,
                ascent: 0.8 * font_size,
                descent: 0.2 * font_size,
                angle: 0.0,
            },
        };

        let name = options
            .name
            .unwrap_or_else(|| format!("Text: {}", truncated(&block.text, 24)));

        let graph = self.graph.as_mut().ok_or(GraphError::NotInitialized)?;
        let image = graph.source_image.pixel_size();
        let mut layer = Layer {
            id,
            name,
            kind: LayerKind::Text(attrs),
            visible: true,
            locked: false,
            opacity: 1.0,
            blend_mode: BlendMode::Normal,
            z_index: graph.next_z_index(),
            bbox: block.bbox,
            mask: None,
            area_pct: 0.0,
            created_at: now,
            updated_at: now,
            original_transform: Transform::identity(),
            current_transform: Transform::identity(),
            source: options.source.unwrap_or_default(),
            confidence: Some(block.confidence),
            tags: options.tags,
            history: HistoryLog::new(),
        };
        layer.recompute_area_pct(image);
        layer.record(
            "create",
            json!({"type": "text", "granularity": block.granularity.to_string()}),
            now,
        );

        let background_id = graph.background_id;
        graph.layers.insert(id, layer);
        graph.attach(background_id, id);

        debug!(%id, "text layer created");
        Ok(id)
    }

    /// Create a layer from a segmentation detection.
    ///
    /// The mask is normalized from either wire form; a malformed mask
    /// degrades to the 1×1 empty mask and never blocks creation.
    pub fn create_object_layer(
        &mut self,
        detection: &SegmentationDetection,
        options: ObjectLayerOptions,
    ) -> Result<LayerId> {
        if self.graph.is_none() {
            return Err(GraphError::NotInitialized);
        }
        let id = self.issue_layer_id();
        let now = self.clock.now();

        let rle = Rle::from_value(&detection.mask);
        let name = options
            .name
            .or_else(|| options.category.clone())
            .unwrap_or_else(|| "Object".to_string());

        let graph = self.graph.as_mut().ok_or(GraphError::NotInitialized)?;
        let image = graph.source_image.pixel_size();
        let mut layer = Layer {
            id,
            name,
            kind: LayerKind::Object(ObjectAttrs {
                category: options.category,
                prompts: vec![SegmentationPrompt::Mask { rle: rle.clone() }],
                attributes: BTreeMap::new(),
            }),
            visible: true,
            locked: false,
            opacity: 1.0,
            blend_mode: BlendMode::Normal,
            z_index: graph.next_z_index(),
            bbox: detection.bbox,
            mask: Some(rle),
            area_pct: 0.0,
            created_at: now,
            updated_at: now,
            original_transform: Transform::identity(),
            current_transform: Transform::identity(),
            source: options.source.unwrap_or_default(),
            confidence: Some(detection.confidence),
            tags: options.tags,
            history: HistoryLog::new(),
        };
        layer.recompute_area_pct(image);
        layer.record("create", json!({"type": "object"}), now);

        let background_id = graph.background_id;
        graph.layers.insert(id, layer);
        graph.attach(background_id, id);

        debug!(%id, "object layer created");
        Ok(id)
    }

    /// Shift a layer's current placement additively.
    ///
    /// Soft no-op (`Ok(false)`) when the layer is unknown or locked.
    pub fn move_layer(&mut self, id: LayerId, dx: f64, dy: f64) -> Result<bool> {
        let now = self.clock.now();
        let graph = self.graph.as_mut().ok_or(GraphError::NotInitialized)?;
        let image = graph.source_image.pixel_size();
        let Some(layer) = graph.layer_mut(id) else {
            return Ok(false);
        };
        if layer.locked {
            return Ok(false);
        }

        layer.current_transform = layer.current_transform.translated(dx, dy);
        layer.recompute_area_pct(image);
        layer.record("move", json!({"dx": dx, "dy": dy}), now);
        Ok(true)
    }

    /// Scale a layer's current placement multiplicatively.
    ///
    /// Soft no-op on unknown or locked layers, and on degenerate factors.
    pub fn resize_layer(&mut self, id: LayerId, factor: f64) -> Result<bool> {
        if !factor.is_finite() || factor <= 0.0 {
            return Ok(false);
        }
        let now = self.clock.now();
        let graph = self.graph.as_mut().ok_or(GraphError::NotInitialized)?;
        let image = graph.source_image.pixel_size();
        let Some(layer) = graph.layer_mut(id) else {
            return Ok(false);
        };
        if layer.locked {
            return Ok(false);
        }

        layer.current_transform = layer.current_transform.scaled(factor);
        layer.recompute_area_pct(image);
        layer.record("resize", json!({"factor": factor}), now);
        Ok(true)
    }

    /// Show or hide a layer
    pub fn set_layer_visibility(&mut self, id: LayerId, visible: bool) -> Result<bool> {
        let now = self.clock.now();
        let graph = self.graph.as_mut().ok_or(GraphError::NotInitialized)?;
        let Some(layer) = graph.layer_mut(id) else {
            return Ok(false);
        };

        layer.visible = visible;
        layer.record("set_visibility", json!({"visible": visible}), now);
        Ok(true)
    }

    /// Lock or unlock a layer against move/resize
    pub fn set_layer_locked(&mut self, id: LayerId, locked: bool) -> Result<bool> {
        let now = self.clock.now();
        let graph = self.graph.as_mut().ok_or(GraphError::NotInitialized)?;
        let Some(layer) = graph.layer_mut(id) else {
            return Ok(false);
        };

        layer.locked = locked;
        layer.record("set_locked", json!({"locked": locked}), now);
        Ok(true)
    }

    /// Replace the background's excluded-layer list.
    ///
    /// Ids not present in the graph are dropped, keeping the exclusion
    /// invariant intact.
    pub fn update_background_layer(&mut self, excluded: &[LayerId]) -> Result<bool> {
        let now = self.clock.now();
        let graph = self.graph.as_mut().ok_or(GraphError::NotInitialized)?;
        let present: Vec<LayerId> = excluded
            .iter()
            .copied()
            .filter(|id| graph.layers.contains_key(id))
            .collect();

        let background_id = graph.background_id;
        let Some(background) = graph.layer_mut(background_id) else {
            return Ok(false);
        };
        let LayerKind::Background(attrs) = &mut background.kind else {
            return Ok(false);
        };

        attrs.excluded_layers = present.clone();
        background.record(
            "update_background",
            json!({"excludedLayers": present}),
            now,
        );
        Ok(true)
    }

    /// All layers in stable compositing order, foreground-most last
    pub fn get_layers(&self) -> Result<Vec<&Layer>> {
        let graph = self.graph.as_ref().ok_or(GraphError::NotInitialized)?;
        Ok(graph.layers_by_z())
    }

    /// Serialize the whole graph for export
    pub fn export_to_json(&self) -> Result<GraphExport> {
        let graph = self.graph.as_ref().ok_or(GraphError::NotInitialized)?;
        Ok(GraphExport::from_graph(graph, self.clock.now()))
    }
}

impl Default for LayerGraphManager {
    fn default() -> Self {
        Self::new()
    }
}

fn truncated(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::TextGranularity;
    use chrono::TimeZone;
    use serde_json::json;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    struct FixedHasher;

    impl ContentHasher for FixedHasher {
        fn digest(&self, bytes: &[u8]) -> String {
            format!("fixed-{}", bytes.len())
        }
    }

    fn test_manager() -> LayerGraphManager {
        LayerGraphManager::with_collaborators(
            Box::new(FixedHasher),
            Box::new(FixedClock(Utc.timestamp_opt(1_700_000_000, 0).unwrap())),
        )
    }

    fn ocr_block(x: f64, y: f64, w: f64, h: f64) -> OcrBlock {
        OcrBlock {
            text: "hello".into(),
            bbox: BBox::new(x, y, w, h),
            confidence: 0.95,
            granularity: TextGranularity::Word,
            language: Some("en".into()),
        }
    }

    #[test]
    fn test_initialize_creates_sole_background_layer() {
        let mut manager = test_manager();
        manager
            .initialize_from_image("img.png", PixelSize::new(400, 300))
            .unwrap();

        let layers = manager.get_layers().unwrap();
        assert_eq!(layers.len(), 1);
        let background = layers[0];
        assert_eq!(background.bbox, BBox::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(background.area_pct, 100.0);
        assert_eq!(background.z_index, 0);
        assert_eq!(background.opacity, 1.0);
        assert!(background.kind.is_background());
        assert_eq!(background.history.len(), 1);

        let LayerKind::Background(attrs) = &background.kind else {
            panic!("background kind expected");
        };
        assert!(attrs.excluded_layers.is_empty());
        assert!(!attrs.content_hash.is_empty());
    }

    #[test]
    fn test_initialize_rejects_degenerate_dimensions() {
        let mut manager = test_manager();
        let err = manager
            .initialize_from_image("img.png", PixelSize::new(0, 300))
            .unwrap_err();
        assert!(matches!(err, GraphError::Configuration { .. }));
    }

    #[test]
    fn test_operations_before_init_fail_hard() {
        let mut manager = test_manager();
        assert!(matches!(
            manager.move_layer(LayerId(1), 1.0, 1.0),
            Err(GraphError::NotInitialized)
        ));
        assert!(matches!(
            manager.create_text_layer(&ocr_block(0.0, 0.0, 10.0, 10.0), Default::default()),
            Err(GraphError::NotInitialized)
        ));
        assert!(matches!(manager.get_layers(), Err(GraphError::NotInitialized)));
        assert!(matches!(
            manager.export_to_json(),
            Err(GraphError::NotInitialized)
        ));
    }

    #[test]
    fn test_z_index_strictly_increases() {
        let mut manager = test_manager();
        manager
            .initialize_from_image("img.png", PixelSize::new(400, 300))
            .unwrap();

        let mut last_z = 0;
        for _ in 0..4 {
            let id = manager
                .create_text_layer(&ocr_block(0.0, 0.0, 40.0, 20.0), Default::default())
                .unwrap();
            let z = manager.graph().unwrap().layer(id).unwrap().z_index;
            assert!(z > last_z, "z must strictly increase");
            last_z = z;
        }
    }

    #[test]
    fn test_font_size_estimate_clamps() {
        let mut manager = test_manager();
        manager
            .initialize_from_image("img.png", PixelSize::new(1000, 1000))
            .unwrap();

        let cases = [(10.0, 12.0), (50.0, 40.0), (200.0, 72.0)];
        for (bbox_height, expected) in cases {
            let id = manager
                .create_text_layer(&ocr_block(0.0, 0.0, 100.0, bbox_height), Default::default())
                .unwrap();
            let layer = manager.graph().unwrap().layer(id).unwrap();
            let LayerKind::Text(attrs) = &layer.kind else {
                panic!("text kind expected");
            };
            assert_eq!(attrs.font.size_px, expected);
            assert!(attrs.font.estimated);
        }
    }

    #[test]
    fn test_area_pct_formula() {
        let mut manager = test_manager();
        manager
            .initialize_from_image("img.png", PixelSize::new(400, 300))
            .unwrap();
        let id = manager
            .create_text_layer(&ocr_block(10.0, 10.0, 100.0, 30.0), Default::default())
            .unwrap();
        let layer = manager.graph().unwrap().layer(id).unwrap();
        assert!((layer.area_pct - 100.0 * (100.0 * 30.0) / (400.0 * 300.0)).abs() < 1e-9);
    }

    #[test]
    fn test_object_layer_normalizes_legacy_mask() {
        let mut manager = test_manager();
        manager
            .initialize_from_image("img.png", PixelSize::new(100, 100))
            .unwrap();

        let detection = SegmentationDetection {
            mask: json!({"width": 4, "height": 1, "runs": [{"start": 1, "length": 2}]}),
            bbox: BBox::new(5.0, 5.0, 4.0, 1.0),
            confidence: 0.8,
        };
        let id = manager
            .create_object_layer(&detection, Default::default())
            .unwrap();
        let layer = manager.graph().unwrap().layer(id).unwrap();
        let mask = layer.mask.as_ref().expect("mask stored");
        assert_eq!(mask.counts, vec![1, 2, 1]);
        assert!(mask.is_consistent());

        let LayerKind::Object(attrs) = &layer.kind else {
            panic!("object kind expected");
        };
        assert!(matches!(attrs.prompts[0], SegmentationPrompt::Mask { .. }));
    }

    #[test]
    fn test_object_layer_survives_malformed_mask() {
        let mut manager = test_manager();
        manager
            .initialize_from_image("img.png", PixelSize::new(100, 100))
            .unwrap();

        let detection = SegmentationDetection {
            mask: json!({"garbage": true}),
            bbox: BBox::new(0.0, 0.0, 10.0, 10.0),
            confidence: 0.5,
        };
        let id = manager
            .create_object_layer(&detection, Default::default())
            .unwrap();
        let layer = manager.graph().unwrap().layer(id).unwrap();
        assert_eq!(layer.mask.as_ref().unwrap(), &Rle::empty());
    }

    #[test]
    fn test_move_updates_current_transform_only() {
        let mut manager = test_manager();
        manager
            .initialize_from_image("img.png", PixelSize::new(400, 300))
            .unwrap();
        let id = manager
            .create_text_layer(&ocr_block(10.0, 10.0, 40.0, 20.0), Default::default())
            .unwrap();

        assert!(manager.move_layer(id, 5.0, -3.0).unwrap());
        let layer = manager.graph().unwrap().layer(id).unwrap();
        assert_eq!(layer.current_transform.offset_x, 5.0);
        assert_eq!(layer.current_transform.offset_y, -3.0);
        assert_eq!(layer.original_transform, Transform::identity());
        assert_eq!(layer.history.last().unwrap().operation, "move");
    }

    #[test]
    fn test_resize_scales_and_recomputes_area() {
        let mut manager = test_manager();
        manager
            .initialize_from_image("img.png", PixelSize::new(400, 300))
            .unwrap();
        let id = manager
            .create_text_layer(&ocr_block(10.0, 10.0, 40.0, 20.0), Default::default())
            .unwrap();
        let before = manager.graph().unwrap().layer(id).unwrap().area_pct;

        assert!(manager.resize_layer(id, 2.0).unwrap());
        let layer = manager.graph().unwrap().layer(id).unwrap();
        assert!((layer.area_pct - before * 4.0).abs() < 1e-9);
        assert_eq!(layer.current_transform.scale, 2.0);
        assert_eq!(layer.original_transform, Transform::identity());

        // Degenerate factors are soft no-ops
        assert!(!manager.resize_layer(id, 0.0).unwrap());
        assert!(!manager.resize_layer(id, f64::NAN).unwrap());
    }

    #[test]
    fn test_locked_layer_is_immutable() {
        let mut manager = test_manager();
        manager
            .initialize_from_image("img.png", PixelSize::new(400, 300))
            .unwrap();
        let id = manager
            .create_text_layer(&ocr_block(10.0, 10.0, 40.0, 20.0), Default::default())
            .unwrap();
        assert!(manager.set_layer_locked(id, true).unwrap());

        assert!(!manager.move_layer(id, 5.0, 5.0).unwrap());
        assert!(!manager.resize_layer(id, 2.0).unwrap());
        let layer = manager.graph().unwrap().layer(id).unwrap();
        assert_eq!(layer.current_transform, Transform::identity());

        // Unlocking is allowed and restores mutability
        assert!(manager.set_layer_locked(id, false).unwrap());
        assert!(manager.move_layer(id, 5.0, 5.0).unwrap());
    }

    #[test]
    fn test_unknown_layer_is_soft_failure() {
        let mut manager = test_manager();
        manager
            .initialize_from_image("img.png", PixelSize::new(400, 300))
            .unwrap();

        assert!(!manager.move_layer(LayerId(999), 1.0, 1.0).unwrap());
        assert!(!manager.resize_layer(LayerId(999), 2.0).unwrap());
        assert!(!manager.set_layer_visibility(LayerId(999), false).unwrap());
        assert!(manager.graph().unwrap().layer(LayerId(999)).is_none());
    }

    #[test]
    fn test_update_background_filters_unknown_ids() {
        let mut manager = test_manager();
        manager
            .initialize_from_image("img.png", PixelSize::new(400, 300))
            .unwrap();
        let id = manager
            .create_text_layer(&ocr_block(0.0, 0.0, 40.0, 20.0), Default::default())
            .unwrap();

        assert!(manager
            .update_background_layer(&[id, LayerId(424242)])
            .unwrap());
        let graph = manager.graph().unwrap();
        let background = graph.layer(graph.background_id).unwrap();
        let LayerKind::Background(attrs) = &background.kind else {
            panic!("background kind expected");
        };
        assert_eq!(attrs.excluded_layers, vec![id]);
    }

    #[test]
    fn test_get_layers_orders_by_z() {
        let mut manager = test_manager();
        manager
            .initialize_from_image("img.png", PixelSize::new(400, 300))
            .unwrap();
        let a = manager
            .create_text_layer(&ocr_block(0.0, 0.0, 40.0, 20.0), Default::default())
            .unwrap();
        let b = manager
            .create_text_layer(&ocr_block(0.0, 0.0, 40.0, 20.0), Default::default())
            .unwrap();

        let order: Vec<LayerId> = manager.get_layers().unwrap().iter().map(|l| l.id).collect();
        assert_eq!(order.len(), 3);
        assert_eq!(order[1], a);
        assert_eq!(order[2], b, "foreground-most layer comes last");
    }

    #[test]
    fn test_reinitialize_replaces_graph_wholesale() {
        let mut manager = test_manager();
        let first = manager
            .initialize_from_image("a.png", PixelSize::new(100, 100))
            .unwrap();
        manager
            .create_text_layer(&ocr_block(0.0, 0.0, 10.0, 10.0), Default::default())
            .unwrap();

        let second = manager
            .initialize_from_image("b.png", PixelSize::new(200, 200))
            .unwrap();
        assert_ne!(first, second);
        assert_eq!(manager.get_layers().unwrap().len(), 1);
        assert_eq!(manager.graph().unwrap().source_image.url, "b.png");
    }

    #[test]
    fn test_deterministic_under_fixed_collaborators() {
        let build = || {
            let mut manager = test_manager();
            manager
                .initialize_from_image("img.png", PixelSize::new(400, 300))
                .unwrap();
            manager
                .create_text_layer(&ocr_block(10.0, 10.0, 40.0, 20.0), Default::default())
                .unwrap();
            manager.export_to_json().unwrap()
        };
        assert_eq!(build(), build());
    }
}
