use layergraph::{OcrBlock, SegmentationDetection};
use mask::RefineOp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayerCliError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSerError(#[from] toml::ser::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Unsupported file format. Please use .toml or .json files")]
    UnsupportedFileFormat,
}

/// Detector outputs handed to the layer graph
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Detections {
    /// OCR text blocks
    #[serde(default)]
    pub text: Vec<OcrBlock>,
    /// Segmentation detections
    #[serde(default)]
    pub objects: Vec<SegmentationDetection>,
}

/// Display surface the graph will be fitted to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SurfaceSection {
    pub width: f64,
    pub height: f64,
}

/// A project: one source image plus the detections to layer over it
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProjectConfig {
    /// Path to the source image
    pub image: String,
    /// Path the export JSON is written to
    pub output: String,
    #[serde(default)]
    pub detections: Detections,
    /// Refinement ops applied to every object mask before layer creation
    #[serde(default)]
    pub refine: Vec<RefineOp>,
    #[serde(default)]
    pub surface: Option<SurfaceSection>,
}

impl ProjectConfig {
    /// Load a project configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, LayerCliError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a project configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, LayerCliError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a project configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, LayerCliError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a project configuration from a JSON string
    pub fn from_json(content: &str) -> Result<Self, LayerCliError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from either supported format, keyed on the file extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LayerCliError> {
        match path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(LayerCliError::UnsupportedFileFormat),
        }
    }

    /// Save the configuration as JSON
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), LayerCliError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_config() {
        let config = ProjectConfig::from_json(
            r#"{
                "image": "shop.png",
                "output": "graph.json",
                "detections": {
                    "text": [{
                        "text": "OPEN",
                        "bbox": {"x": 4.0, "y": 8.0, "width": 60.0, "height": 24.0},
                        "confidence": 0.93
                    }]
                },
                "refine": [{"type": "close", "params": {"iterations": 1}}]
            }"#,
        )
        .expect("Should parse");
        assert_eq!(config.detections.text.len(), 1);
        assert_eq!(config.refine, vec![RefineOp::Close { iterations: 1 }]);
        assert!(config.surface.is_none());
    }

    #[test]
    fn test_parse_toml_config() {
        let config = ProjectConfig::from_toml(
            r#"
            image = "shop.png"
            output = "graph.json"

            [surface]
            width = 800.0
            height = 600.0

            [[refine]]
            type = "feather"
            [refine.params]
            radius = 3
            "#,
        )
        .expect("Should parse");
        assert_eq!(config.surface.unwrap().width, 800.0);
        assert_eq!(config.refine, vec![RefineOp::Feather { radius: 3 }]);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        assert!(matches!(
            ProjectConfig::from_file("project.yaml"),
            Err(LayerCliError::UnsupportedFileFormat)
        ));
    }
}
