use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod engine;
mod engines;
mod error;
mod pipeline;
mod preprocessing;
mod storage;
mod sync;
mod translate;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "textlens")]
#[command(about = "OCR-and-translate pipeline for images synced from cloud storage")]
#[command(version)]
pub struct Args {
    /// Target language code for translation (e.g. "hi", "es")
    #[arg(long, env = "TEXTLENS_LANG", default_value = "hi", global = true)]
    pub lang: String,

    /// Binarization cutoff applied before OCR (0-255)
    #[arg(long, env = "TEXTLENS_THRESHOLD", default_value = "150", global = true)]
    pub threshold: u8,

    /// Storage bucket holding remote images (required for watch)
    #[arg(long, env = "TEXTLENS_BUCKET", global = true)]
    pub bucket: Option<String>,

    /// Path to a file containing the storage access token
    #[arg(long, env = "TEXTLENS_CREDENTIALS", global = true)]
    pub credentials: Option<PathBuf>,

    /// Directory downloaded images are written to
    #[arg(
        long,
        env = "TEXTLENS_DOWNLOAD_DIR",
        default_value = "local_images",
        global = true
    )]
    pub download_dir: PathBuf,

    /// Remote object prefix to watch
    #[arg(long, env = "TEXTLENS_PREFIX", default_value = "images/", global = true)]
    pub prefix: String,

    /// Seconds to sleep between storage polls
    #[arg(long, env = "TEXTLENS_POLL_INTERVAL", default_value = "10", global = true)]
    pub poll_interval: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the pipeline once over a local image file
    Run {
        /// Path to the image file
        image: PathBuf,
    },
    /// Poll the bucket for new images and run the pipeline over each one
    Watch,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from(&args);

    tracing::info!("Starting textlens v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Run { image } => run_once(&config, &image),
        Command::Watch => watch(&config),
    }
}

/// Run the pipeline once over a single local image.
fn run_once(config: &Config, image: &Path) -> anyhow::Result<()> {
    if !image.exists() {
        anyhow::bail!("image file not found: {}", image.display());
    }

    let engine = engines::create(config)?;
    let translator = translate::GoogleTranslator::new();

    pipeline::process_image(image, engine.as_ref(), &translator, config)?;
    Ok(())
}

/// Poll the bucket forever, running the pipeline over each newly
/// downloaded image. A failure on one image does not stop the loop.
fn watch(config: &Config) -> anyhow::Result<()> {
    let bucket = config
        .bucket
        .clone()
        .ok_or_else(|| anyhow::anyhow!("watch requires --bucket (or TEXTLENS_BUCKET)"))?;

    let store = storage::FirebaseBucket::new(bucket, config.credentials.as_deref())?;
    let mut controller = sync::SyncController::new(
        Box::new(store),
        config.remote_prefix.clone(),
        config.download_dir.clone(),
    );

    let engine = engines::create(config)?;
    let translator = translate::GoogleTranslator::new();
    let interval = Duration::from_secs(config.poll_interval_secs);

    loop {
        match controller.poll_once() {
            Ok(new_images) => {
                for path in new_images {
                    if let Err(e) =
                        pipeline::process_image(&path, engine.as_ref(), &translator, config)
                    {
                        tracing::error!("Skipping {}: {}", path.display(), e);
                    }
                }
            }
            Err(e) => tracing::error!("Poll failed: {}", e),
        }

        std::thread::sleep(interval);
    }
}
