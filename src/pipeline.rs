//! Pipeline driver
//!
//! Composes the stages in strict sequence for one image: read,
//! preprocess, extract, translate, report. Results are printed to
//! standard output; logs carry diagnostics only.

use std::path::Path;
use std::time::Instant;

use image::DynamicImage;

use crate::config::Config;
use crate::engine::OcrEngine;
use crate::error::PipelineError;
use crate::preprocessing;
use crate::translate::Translate;

/// How a single run ended. Fatal errors are returned as `Err` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Text was extracted and translated.
    Translated {
        extracted: String,
        translated: String,
    },
    /// Text was extracted but the translation service failed. The run
    /// still completes.
    TranslationFailed { extracted: String, reason: String },
    /// OCR found no text; the translator was never invoked.
    NoText,
}

/// Run the full pipeline over one image and print the results.
pub fn process_image(
    path: &Path,
    engine: &dyn OcrEngine,
    translator: &dyn Translate,
    config: &Config,
) -> Result<RunOutcome, PipelineError> {
    let start = Instant::now();

    let image = image::open(path).map_err(|e| PipelineError::ImageRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let binary = DynamicImage::ImageLuma8(preprocessing::binarize(&image, config.threshold));

    let text = engine.recognize(&binary)?;
    tracing::debug!(
        "{} recognized {} chars in {}ms",
        engine.name(),
        text.len(),
        start.elapsed().as_millis()
    );

    if text.trim().is_empty() {
        println!("No text was extracted from the image.");
        return Ok(RunOutcome::NoText);
    }

    println!("Extracted Text: '{}'", text);

    match translator.translate(&text, &config.target_lang) {
        Ok(translated) => {
            println!("Translated Text: '{}'", translated);
            Ok(RunOutcome::Translated {
                extracted: text,
                translated,
            })
        }
        Err(e) => {
            println!("Translation Error: {}", e);
            Ok(RunOutcome::TranslationFailed {
                extracted: text,
                reason: e.to_string(),
            })
        }
    }
}
