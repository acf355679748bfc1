//! Thumbnail extraction.

use std::path::Path;

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::MediaResult;

/// Seek into `video` and extract exactly one frame as a still image.
pub async fn extract_frame(
    video: impl AsRef<Path>,
    at_seconds: f64,
    output: impl AsRef<Path>,
) -> MediaResult<()> {
    let cmd = FfmpegCommand::new(video, output).seek(at_seconds).single_frame();

    FfmpegRunner::new().run(&cmd).await
}
