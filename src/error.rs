use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read image {}: {reason}", .path.display())]
    ImageRead { path: PathBuf, reason: String },

    #[error("Failed to initialize OCR engine: {0}")]
    EngineInit(String),

    #[error("OCR recognition failed: {0}")]
    Recognition(String),

    #[error("Translation failed: {0}")]
    Translation(String),

    #[error("Storage request failed: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
