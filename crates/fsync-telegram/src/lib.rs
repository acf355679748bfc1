//! Telegram channel uploads for hourly clips.
//!
//! Built on `teloxide`; the Bot API transport is not reimplemented here.

pub mod error;
pub mod uploader;

pub use error::{TelegramError, TelegramResult};
pub use uploader::{ChannelConfig, ChannelUploader, ClipUploader};
