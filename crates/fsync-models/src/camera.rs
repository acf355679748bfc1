//! Camera naming and segment directory layout.

use std::path::{Path, PathBuf};

use crate::hour::HourBucket;

/// Fixed hashtag prepended to every hourly caption.
pub const HOURLY_TAG: &str = "#Hourly";

/// Hashtag-safe camera name; Telegram hashtags cannot contain dashes.
pub fn hashtag_name(camera: &str) -> String {
    camera.replace('-', "_")
}

/// Directory holding one camera's segments for one hour bucket:
/// `{prefix}/{YYYY-MM}/{DD}/{HH}/{camera}`.
pub fn segment_dir(prefix: impl AsRef<Path>, hour: &HourBucket, camera: &str) -> PathBuf {
    prefix.as_ref().join(hour.dir_fragment()).join(camera)
}

/// Caption for one camera's hourly clip.
pub fn caption(camera: &str, hour: &HourBucket) -> String {
    format!("{} #{}\n{}", HOURLY_TAG, hashtag_name(camera), hour.caption_stamp())
}
