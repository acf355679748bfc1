//! Silent video uploads to a fixed Telegram chat.

use std::path::Path;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InputFile};
use tracing::info;

use crate::error::TelegramResult;

/// Credentials and destination for channel uploads.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    /// Numeric application identifier (bot token part before the colon).
    pub app_id: i64,
    /// Application secret (bot token part after the colon).
    pub app_hash: String,
    /// Destination chat id; channel ids are negative.
    pub chat_id: i64,
}

impl ChannelConfig {
    /// The Bot API token, `<app_id>:<app_hash>`.
    pub fn token(&self) -> String {
        format!("{}:{}", self.app_id, self.app_hash)
    }
}

/// Upload seam used by the sync pipeline.
#[async_trait]
pub trait ClipUploader {
    /// Send a clip plus thumbnail with the given caption, silently.
    async fn upload_clip(&self, video: &Path, thumbnail: &Path, caption: &str)
        -> TelegramResult<()>;
}

/// Uploader bound to one bot account and one destination chat.
pub struct ChannelUploader {
    bot: Bot,
    chat_id: ChatId,
}

impl ChannelUploader {
    /// Authenticate the session and resolve the destination chat.
    pub async fn connect(config: &ChannelConfig) -> TelegramResult<Self> {
        let bot = Bot::new(config.token());

        let me = bot.get_me().await?;
        info!("authorized as @{}", me.user.username.as_deref().unwrap_or("unknown"));

        let chat_id = ChatId(config.chat_id);
        let chat = bot.get_chat(chat_id).await?;
        info!(chat_id = config.chat_id, "resolved destination chat {:?}", chat.title());

        Ok(Self { bot, chat_id })
    }
}

#[async_trait]
impl ClipUploader for ChannelUploader {
    async fn upload_clip(
        &self,
        video: &Path,
        thumbnail: &Path,
        caption: &str,
    ) -> TelegramResult<()> {
        self.bot
            .send_video(self.chat_id, InputFile::file(video))
            .caption(caption)
            .thumbnail(InputFile::file(thumbnail))
            .supports_streaming(true)
            .disable_notification(true)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_joins_id_and_secret() {
        let config = ChannelConfig {
            app_id: 123456,
            app_hash: "abcDEF".to_string(),
            chat_id: -1001234567890,
        };
        assert_eq!(config.token(), "123456:abcDEF");
    }
}
