use image::DynamicImage;

use crate::error::PipelineError;

/// Trait that all OCR engines must implement
pub trait OcrEngine {
    /// Returns the engine identifier (e.g., "ocrs")
    fn name(&self) -> &'static str;

    /// Recognize text in a preprocessed image.
    ///
    /// An empty string is a valid result meaning no text was found;
    /// classifying emptiness is the caller's job.
    fn recognize(&self, image: &DynamicImage) -> Result<String, PipelineError>;
}
