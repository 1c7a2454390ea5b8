//! Cloud storage client
//!
//! Lists and downloads objects from a Firebase Storage bucket over its
//! REST surface. The access token, when present, is read from the
//! credentials file supplied in configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::PipelineError;

const STORAGE_BASE_URL: &str = "https://firebasestorage.googleapis.com/v0/b";

/// Trait for object storage backends
pub trait ObjectStore {
    /// List object names under a prefix.
    fn list(&self, prefix: &str) -> Result<Vec<String>, PipelineError>;

    /// Fetch the raw bytes of one object.
    fn fetch(&self, name: &str) -> Result<Vec<u8>, PipelineError>;
}

/// Firebase Storage bucket accessed over REST
pub struct FirebaseBucket {
    bucket: String,
    token: Option<String>,
}

impl FirebaseBucket {
    /// Create a client for `bucket`, reading the access token from the
    /// credentials file if one was supplied.
    pub fn new(bucket: String, credentials: Option<&Path>) -> Result<Self, PipelineError> {
        let token = match credentials {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|e| {
                    PipelineError::Storage(format!(
                        "Failed to read credentials file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                Some(raw.trim().to_string())
            }
            None => None,
        };

        Ok(Self { bucket, token })
    }

}

impl ObjectStore for FirebaseBucket {
    fn list(&self, prefix: &str) -> Result<Vec<String>, PipelineError> {
        let url = format!("{}/{}/o", STORAGE_BASE_URL, self.bucket);

        let mut request = ureq::get(url.as_str()).query("prefix", prefix);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .call()
            .map_err(|e| PipelineError::Storage(format!("Failed to list bucket: {}", e)))?;

        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| PipelineError::Storage(format!("Failed to read listing: {}", e)))?;

        parse_list_response(&body)
    }

    fn fetch(&self, name: &str) -> Result<Vec<u8>, PipelineError> {
        let url = format!(
            "{}/{}/o/{}",
            STORAGE_BASE_URL,
            self.bucket,
            encode_object_name(name)
        );

        let mut request = ureq::get(url.as_str()).query("alt", "media");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .call()
            .map_err(|e| PipelineError::Storage(format!("Failed to download {}: {}", name, e)))?;

        response
            .into_body()
            .read_to_vec()
            .map_err(|e| PipelineError::Storage(format!("Failed to read {}: {}", name, e)))
    }
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    items: Vec<ObjectItem>,
}

#[derive(Debug, Deserialize)]
struct ObjectItem {
    name: String,
}

fn parse_list_response(body: &str) -> Result<Vec<String>, PipelineError> {
    let listing: ListResponse = serde_json::from_str(body)
        .map_err(|e| PipelineError::Storage(format!("Unexpected listing response: {}", e)))?;

    Ok(listing.items.into_iter().map(|item| item.name).collect())
}

/// Percent-encode an object name for use as a single URL path segment.
/// Slashes inside the name must be encoded too.
fn encode_object_name(name: &str) -> String {
    let mut encoded = String::with_capacity(name.len());
    for byte in name.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_response() {
        let body = r#"{
            "prefixes": [],
            "items": [
                {"name": "images/IMG_3172.jpg", "bucket": "demo.appspot.com"},
                {"name": "images/IMG_3173.jpg", "bucket": "demo.appspot.com"}
            ]
        }"#;

        let names = parse_list_response(body).unwrap();
        assert_eq!(names, vec!["images/IMG_3172.jpg", "images/IMG_3173.jpg"]);
    }

    #[test]
    fn test_parse_list_response_without_items() {
        let names = parse_list_response(r#"{"prefixes": ["images/"]}"#).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_parse_list_response_rejects_garbage() {
        let err = parse_list_response("<html>not json</html>").unwrap_err();
        assert!(matches!(err, PipelineError::Storage(_)));
    }

    #[test]
    fn test_encode_object_name() {
        assert_eq!(
            encode_object_name("images/IMG 3172.jpg"),
            "images%2FIMG%203172.jpg"
        );
        assert_eq!(encode_object_name("plain-name_1.png"), "plain-name_1.png");
    }
}
