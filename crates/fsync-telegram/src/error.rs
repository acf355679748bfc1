//! Telegram error types.

use thiserror::Error;

/// Result type for channel operations.
pub type TelegramResult<T> = Result<T, TelegramError>;

/// Errors raised while talking to the Bot API.
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("Telegram request failed: {0}")]
    Request(#[from] teloxide::RequestError),
}
