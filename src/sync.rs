//! Storage sync controller
//!
//! Owns the record of already-downloaded object names. The set is created
//! at startup, queried and updated once per poll cycle, and never
//! accessed concurrently.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::error::PipelineError;
use crate::storage::ObjectStore;

pub struct SyncController {
    store: Box<dyn ObjectStore>,
    prefix: String,
    dest_dir: PathBuf,
    downloaded: HashSet<String>,
}

impl SyncController {
    pub fn new(store: Box<dyn ObjectStore>, prefix: String, dest_dir: PathBuf) -> Self {
        Self {
            store,
            prefix,
            dest_dir,
            downloaded: HashSet::new(),
        }
    }

    /// List the prefix and download every object not seen before.
    ///
    /// Returns the local paths of newly downloaded files in listing
    /// order. A failed download is logged and retried on a later poll;
    /// it does not abort the cycle.
    pub fn poll_once(&mut self) -> Result<Vec<PathBuf>, PipelineError> {
        let names = self.store.list(&self.prefix)?;
        fs::create_dir_all(&self.dest_dir)?;

        let mut new_files = Vec::new();
        for name in names {
            if self.downloaded.contains(&name) {
                continue;
            }
            // Listing a prefix can include the directory placeholder itself.
            let Some(filename) = local_filename(&name) else {
                continue;
            };

            let bytes = match self.store.fetch(&name) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!("Failed to download {}: {}", name, e);
                    continue;
                }
            };

            let path = self.dest_dir.join(filename);
            fs::write(&path, &bytes)?;
            self.downloaded.insert(name);
            tracing::info!("Downloaded: {}", path.display());
            new_files.push(path);
        }

        Ok(new_files)
    }
}

/// Last path segment of an object name; `None` for directory placeholders.
fn local_filename(name: &str) -> Option<&str> {
    match name.rsplit('/').next() {
        Some("") | None => None,
        Some(segment) => Some(segment),
    }
}
