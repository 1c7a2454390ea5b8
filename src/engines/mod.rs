//! OCR engine implementations

pub mod ocrs;

use crate::config::Config;
use crate::engine::OcrEngine;
use crate::error::PipelineError;

/// Construct the default OCR engine.
pub fn create(config: &Config) -> Result<Box<dyn OcrEngine>, PipelineError> {
    tracing::info!("Initializing ocrs engine...");
    let engine = ocrs::OcrsEngine::new(config)?;
    Ok(Box::new(engine))
}
