//! Run configuration loaded from the settings file.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use fsync_telegram::ChannelConfig;

/// Immutable settings for one run.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    pub telegram: TelegramSection,
    pub ffmpeg: FfmpegSection,
    pub frigate: FrigateSection,
}

/// `[telegram]` — messaging credentials and destination.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramSection {
    pub app_id: i64,
    pub app_hash: String,
    pub chat_id: i64,
}

/// `[ffmpeg]` — transient artifact paths, overwritten per camera.
#[derive(Debug, Clone, Deserialize)]
pub struct FfmpegSection {
    pub path_video: PathBuf,
    pub path_thumbnail: PathBuf,
    pub path_list: PathBuf,
}

/// `[frigate]` — recording layout and camera set.
#[derive(Debug, Clone, Deserialize)]
pub struct FrigateSection {
    pub path_prefix: PathBuf,
    pub(crate) cameras: String,
}

impl TelegramSection {
    /// Channel credentials in the shape the uploader consumes.
    pub fn channel(&self) -> ChannelConfig {
        ChannelConfig {
            app_id: self.app_id,
            app_hash: self.app_hash.clone(),
            chat_id: self.chat_id,
        }
    }
}

impl FrigateSection {
    /// Configured camera identifiers, in file order, whitespace trimmed.
    pub fn cameras(&self) -> Vec<String> {
        self.cameras
            .split(',')
            .map(|camera| camera.trim().to_string())
            .filter(|camera| !camera.is_empty())
            .collect()
    }
}

impl SyncConfig {
    /// Load the INI settings file, layered with `FSYNC__*` env overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path).format(FileFormat::Ini))
            .add_source(
                Environment::with_prefix("FSYNC")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_settings(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("config.ini");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_all_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(
            dir.path(),
            "[telegram]\n\
             app_id = 123456\n\
             app_hash = abcdef\n\
             chat_id = -1001234567890\n\
             \n\
             [ffmpeg]\n\
             path_video = /tmp/out.mp4\n\
             path_thumbnail = /tmp/thumb.jpg\n\
             path_list = /tmp/list.txt\n\
             \n\
             [frigate]\n\
             path_prefix = /media/frigate/recordings\n\
             cameras = front-door, back-yard\n",
        );

        let config = SyncConfig::load(&path).unwrap();
        assert_eq!(config.telegram.app_id, 123456);
        assert_eq!(config.telegram.chat_id, -1001234567890);
        assert_eq!(config.ffmpeg.path_video, PathBuf::from("/tmp/out.mp4"));
        assert_eq!(config.frigate.path_prefix, PathBuf::from("/media/frigate/recordings"));
        assert_eq!(config.frigate.cameras(), vec!["front-door", "back-yard"]);
    }

    #[test]
    fn cameras_tolerate_extra_whitespace_and_commas() {
        let section = FrigateSection {
            path_prefix: PathBuf::from("/data"),
            cameras: " front-door ,back-yard,, garage ".to_string(),
        };
        assert_eq!(section.cameras(), vec!["front-door", "back-yard", "garage"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SyncConfig::load(&dir.path().join("absent.ini")).is_err());
    }

    #[test]
    fn missing_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(dir.path(), "[telegram]\napp_id = 1\n");
        assert!(SyncConfig::load(&path).is_err());
    }
}
