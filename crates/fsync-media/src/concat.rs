//! Concat-manifest writing and stream-copy concatenation.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::MediaResult;

/// Write the concat-demuxer manifest: one `file '<path>'` directive per
/// segment, in the given order. Any previous manifest is truncated.
pub async fn write_manifest(manifest: impl AsRef<Path>, segments: &[PathBuf]) -> MediaResult<()> {
    let mut body = String::new();
    for path in segments {
        body.push_str(&format!("file '{}'\n", path.display()));
    }
    fs::write(manifest, body).await?;
    Ok(())
}

/// Concatenate the manifest's files into `output` by stream copy.
pub async fn concatenate(manifest: impl AsRef<Path>, output: impl AsRef<Path>) -> MediaResult<()> {
    let cmd = FfmpegCommand::new(manifest, output)
        .input_args(["-f", "concat", "-safe", "0"])
        .stream_copy();

    FfmpegRunner::new().run(&cmd).await
}
