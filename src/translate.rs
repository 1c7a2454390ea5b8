//! Translation client
//!
//! Sends extracted text to the public Google translation endpoint and
//! returns the translated rendering. One best-effort synchronous request
//! per invocation: no retry, no timeout tuning, no rate-limit handling.

use serde_json::Value;

use crate::error::PipelineError;

const TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Trait for translation backends
pub trait Translate {
    /// Translate `text` into the given target language code (e.g. "hi").
    ///
    /// Callers must pass non-empty text; an empty rendering of non-empty
    /// input is reported as an error, never as success.
    fn translate(&self, text: &str, target_lang: &str) -> Result<String, PipelineError>;
}

/// Client for the public Google translation endpoint
pub struct GoogleTranslator {
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self {
            endpoint: TRANSLATE_ENDPOINT.to_string(),
        }
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translate for GoogleTranslator {
    fn translate(&self, text: &str, target_lang: &str) -> Result<String, PipelineError> {
        let response = ureq::get(self.endpoint.as_str())
            .query("client", "gtx")
            .query("sl", "auto")
            .query("tl", target_lang)
            .query("dt", "t")
            .query("q", text)
            .call()
            .map_err(|e| PipelineError::Translation(format!("request failed: {}", e)))?;

        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| PipelineError::Translation(format!("failed to read response: {}", e)))?;

        parse_response(&body)
    }
}

/// Extract the translated text from the endpoint's nested-array response.
///
/// The body looks like `[[["Hola","Hello",...],...],null,"en",...]`: the
/// first element lists translation segments whose first entry is the
/// translated piece.
fn parse_response(body: &str) -> Result<String, PipelineError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| PipelineError::Translation(format!("unexpected response: {}", e)))?;

    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| PipelineError::Translation("unexpected response shape".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.trim().is_empty() {
        return Err(PipelineError::Translation(
            "service returned no translation".to_string(),
        ));
    }

    Ok(translated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_segment() {
        let body = r#"[[["Hola","Hello",null,null,10]],null,"en"]"#;
        assert_eq!(parse_response(body).unwrap(), "Hola");
    }

    #[test]
    fn test_parse_joins_multiple_segments() {
        let body = r#"[[["Hola ","Hello ",null,null,10],["mundo","world",null,null,10]],null,"en"]"#;
        assert_eq!(parse_response(body).unwrap(), "Hola mundo");
    }

    #[test]
    fn test_parse_rejects_empty_translation() {
        let body = r#"[[[""," ",null,null,10]],null,"en"]"#;
        let err = parse_response(body).unwrap_err();
        assert!(matches!(err, PipelineError::Translation(_)));
    }

    #[test]
    fn test_parse_rejects_malformed_body() {
        let err = parse_response("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, PipelineError::Translation(_)));

        let err = parse_response(r#"{"not":"an array"}"#).unwrap_err();
        assert!(matches!(err, PipelineError::Translation(_)));
    }
}
