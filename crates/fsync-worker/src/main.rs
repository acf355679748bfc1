//! Hourly clip sync binary.

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fsync_media::FfmpegTranscoder;
use fsync_models::HourBucket;
use fsync_telegram::ChannelUploader;
use fsync_worker::config::SyncConfig;
use fsync_worker::sync;

/// Stitch per-camera recordings into hourly clips and post them to a
/// Telegram channel.
#[derive(Parser)]
#[command(name = "frigate-sync", version, about)]
struct Cli {
    /// Target hour as YYYY-MM-DDTHH; defaults to one hour before now
    hour: Option<String>,

    /// Path to the settings file
    #[arg(short, long, default_value = "config.ini")]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    let cli = Cli::parse();

    let hour = match &cli.hour {
        Some(raw) => match HourBucket::parse(raw) {
            Ok(hour) => hour,
            Err(e) => {
                error!("{}", e);
                std::process::exit(2);
            }
        },
        None => HourBucket::preceding_now(),
    };

    let config = match SyncConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("failed to load settings from {}: {}", cli.config.display(), e);
            std::process::exit(1);
        }
    };

    info!(cameras = ?config.frigate.cameras(), "starting hourly sync for {}", hour);

    let uploader = match ChannelUploader::connect(&config.telegram.channel()).await {
        Ok(uploader) => uploader,
        Err(e) => {
            error!("Telegram connect failed: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = sync::run(&config, hour, &FfmpegTranscoder, &uploader).await {
        error!("sync run failed: {}", e);
        std::process::exit(1);
    }

    info!("hourly sync complete");
}
