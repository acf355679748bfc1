//! Worker error types.

use thiserror::Error;

/// Result type for the sync pipeline.
pub type WorkerResult<T> = Result<T, WorkerError>;

/// Errors that abort a sync run.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("transcode failed: {0}")]
    Media(#[from] fsync_media::MediaError),

    #[error("upload failed: {0}")]
    Telegram(#[from] fsync_telegram::TelegramError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
