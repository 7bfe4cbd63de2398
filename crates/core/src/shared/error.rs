use std::path::PathBuf;

use thiserror::Error;

/// Failure kinds surfaced to the presentation layer.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The weights file is absent. Callers report it and carry on without
    /// detections.
    #[error("Model file '{}' not found. Please ensure it is in the correct directory.", path.display())]
    ModelFileMissing { path: PathBuf },
    #[error("failed to load model: {0}")]
    ModelLoad(String),
    #[error("failed to decode image: {0}")]
    ImageDecode(String),
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalysisError {
    /// Whether processing may continue with an empty result.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AnalysisError::ModelFileMissing { .. })
    }
}
