use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Invalid source dimensions: {width}x{height}")]
    Configuration { width: u32, height: u32 },

    #[error("Layer graph is not initialized")]
    NotInitialized,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
