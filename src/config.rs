use std::path::PathBuf;

use crate::Args;

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub target_lang: String,
    pub threshold: u8,
    pub bucket: Option<String>,
    pub credentials: Option<PathBuf>,
    pub download_dir: PathBuf,
    pub remote_prefix: String,
    pub poll_interval_secs: u64,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            target_lang: args.lang.clone(),
            threshold: args.threshold,
            bucket: args.bucket.clone(),
            credentials: args.credentials.clone(),
            download_dir: args.download_dir.clone(),
            remote_prefix: args.prefix.clone(),
            poll_interval_secs: args.poll_interval,
        }
    }
}
