use clap::{Parser, Subcommand};
use cli::ProjectConfig;
use color_eyre::eyre::Result;
use layergraph::{LayerGraphManager, LayerId, SegmentationDetection};
use layerkit_common::{PixelSize, Size, Transform};
use mask::{RefineOp, Rle};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a layer graph from a project configuration and export it
    Process {
        /// Path to the JSON or TOML project configuration
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Normalize a mask file and report its statistics
    InspectMask {
        /// Path to a JSON file holding a mask in either wire form
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Process { config } => {
            process_project(config)?;
        }
        Commands::InspectMask { input } => {
            inspect_mask(input)?;
        }
    }

    Ok(())
}

fn process_project(config_path: &Path) -> Result<()> {
    let config = ProjectConfig::from_file(config_path)?;
    info!("Project: {:?}", config.image);

    let (width, height) = image::image_dimensions(&config.image)?;
    let dims = PixelSize::new(width, height);

    let mut manager = LayerGraphManager::new();
    let graph_id = manager.initialize_from_image(&config.image, dims)?;
    info!("Initialized graph {graph_id} ({width}x{height})");

    for block in &config.detections.text {
        let id = manager.create_text_layer(block, Default::default())?;
        info!("Text layer {id}: {:?}", block.text);
    }

    let mut object_ids: Vec<LayerId> = Vec::new();
    for detection in &config.detections.objects {
        let detection = refine_detection(detection, &config.refine)?;
        let id = manager.create_object_layer(&detection, Default::default())?;
        info!("Object layer {id}");
        object_ids.push(id);
    }

    // Carve the extracted objects out of the background
    if !object_ids.is_empty() {
        manager.update_background_layer(&object_ids)?;
    }

    if let Some(surface) = config.surface {
        let fit = Transform::fit(dims, Size::new(surface.width, surface.height))?;
        info!(
            "Surface fit: scale {:.3}, offset ({:.1}, {:.1})",
            fit.scale, fit.offset_x, fit.offset_y
        );
    }

    let export = manager.export_to_json()?;
    std::fs::write(&config.output, export.to_json_string()?)?;
    info!("Exported {} layers to {}", export.layers.len(), config.output);

    Ok(())
}

fn refine_detection(
    detection: &SegmentationDetection,
    ops: &[RefineOp],
) -> Result<SegmentationDetection> {
    if ops.is_empty() {
        return Ok(detection.clone());
    }
    let rle = Rle::from_value(&detection.mask);
    let refined = RefineOp::apply_all(ops, &rle)?;
    Ok(SegmentationDetection {
        mask: serde_json::to_value(refined)?,
        ..detection.clone()
    })
}

fn inspect_mask(input: &Path) -> Result<()> {
    let content = std::fs::read_to_string(input)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    let rle = Rle::from_value(&value);

    if rle == Rle::empty() {
        warn!("Mask was malformed; degraded to the 1x1 empty mask");
    }
    info!(
        "size {}x{}, {} runs, sum {}, foreground {} px ({})",
        rle.width(),
        rle.height(),
        rle.counts.len(),
        rle.run_sum(),
        rle.area(),
        if rle.is_consistent() { "consistent" } else { "INCONSISTENT" },
    );
    if let Some(bbox) = rle.foreground_bbox() {
        info!(
            "foreground bbox: ({}, {}) {}x{}",
            bbox.x, bbox.y, bbox.width, bbox.height
        );
    }

    Ok(())
}
