//! The transcode seam used by the sync pipeline.

use std::path::Path;

use async_trait::async_trait;

use crate::concat;
use crate::error::MediaResult;
use crate::thumbnail;

/// Narrow interface over the external transcode tool.
#[async_trait]
pub trait Transcoder {
    /// Concatenate the manifest's files by stream copy into `output`.
    async fn concatenate(&self, manifest: &Path, output: &Path) -> MediaResult<()>;

    /// Extract a single frame at `at_seconds` into `output`.
    async fn extract_frame(&self, video: &Path, at_seconds: f64, output: &Path) -> MediaResult<()>;
}

/// Transcoder backed by the `ffmpeg` binary.
#[derive(Debug, Default)]
pub struct FfmpegTranscoder;

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn concatenate(&self, manifest: &Path, output: &Path) -> MediaResult<()> {
        concat::concatenate(manifest, output).await
    }

    async fn extract_frame(&self, video: &Path, at_seconds: f64, output: &Path) -> MediaResult<()> {
        thumbnail::extract_frame(video, at_seconds, output).await
    }
}
