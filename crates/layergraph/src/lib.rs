//! # Non-destructive Layer Graph
//!
//! The layer graph is the editable model behind the image editor: one graph
//! per loaded source image, a single permanent background layer, and
//! text/object layers created from detector output. Nothing is ever hard
//! deleted; removal is expressed through visibility and the background's
//! excluded-layer list, so every edit stays reversible.
//!
//! The [`LayerGraphManager`] owns the graph and is the only mutation
//! surface. Its hashing and time collaborators are constructor-injected,
//! which keeps creation timestamps and content digests deterministic under
//! test.
//!
//! ## Quick Start
//!
//! ```rust
//! use layergraph::{LayerGraphManager, OcrBlock, TextGranularity};
//! use layerkit_common::{BBox, PixelSize};
//!
//! let mut manager = LayerGraphManager::new();
//! manager.initialize_from_image("img.png", PixelSize::new(400, 300))?;
//!
//! let block = OcrBlock {
//!     text: "SALE".into(),
//!     bbox: BBox::new(20.0, 30.0, 120.0, 40.0),
//!     confidence: 0.97,
//!     granularity: TextGranularity::Word,
//!     language: None,
//! };
//! let id = manager.create_text_layer(&block, Default::default())?;
//! manager.move_layer(id, 10.0, 0.0)?;
//!
//! let export = manager.export_to_json()?;
//! assert_eq!(export.layers.len(), 2);
//! # Ok::<(), layergraph::GraphError>(())
//! ```

// Core modules
pub mod detect;
pub mod error;
pub mod export;
pub mod graph;
pub mod history;
pub mod manager;
pub mod meta;

// Re-exports for convenience
pub use detect::{OcrBlock, SegmentationDetection, TextGranularity};
pub use error::{GraphError, Result};
pub use export::GraphExport;
pub use graph::{ExportFormat, ExportSettings, LayerGraph, SourceImage};
pub use history::{HistoryEntry, HistoryLog, DEFAULT_HISTORY_CAPACITY};
pub use manager::{
    Clock, ContentHasher, LayerGraphManager, ObjectLayerOptions, Sha256Hasher, SystemClock,
    TextLayerOptions,
};
pub use meta::{
    BackgroundAttrs, BlendMode, FontMetrics, GraphId, Layer, LayerId, LayerKind, ObjectAttrs,
    SegmentationPrompt, SourceAttribution, TextAttrs, TextGeometry,
};
