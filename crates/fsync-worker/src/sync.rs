//! The per-camera hourly sync pipeline.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;

use fsync_media::{concat, Transcoder};
use fsync_models::{camera, HourBucket};
use fsync_telegram::ClipUploader;

use crate::config::SyncConfig;
use crate::error::WorkerResult;

/// Seek offset of the still thumbnail, in seconds.
const THUMBNAIL_AT_SECS: f64 = 1.0;

/// Run the hourly sync for every configured camera, strictly in order.
///
/// A camera whose hour directory is missing is skipped ("no footage this
/// hour"). Any other failure aborts the whole run: later cameras are not
/// attempted and the transient files stay on disk.
pub async fn run<T, U>(
    config: &SyncConfig,
    hour: HourBucket,
    transcoder: &T,
    uploader: &U,
) -> WorkerResult<()>
where
    T: Transcoder,
    U: ClipUploader,
{
    for name in config.frigate.cameras() {
        let dir = camera::segment_dir(&config.frigate.path_prefix, &hour, &name);

        let segments = match list_segments(&dir).await? {
            Some(segments) => segments,
            None => {
                info!(camera = %name, "no footage for {}, skipping", hour);
                continue;
            }
        };

        concat::write_manifest(&config.ffmpeg.path_list, &segments).await?;
        transcoder
            .concatenate(&config.ffmpeg.path_list, &config.ffmpeg.path_video)
            .await?;
        transcoder
            .extract_frame(&config.ffmpeg.path_video, THUMBNAIL_AT_SECS, &config.ffmpeg.path_thumbnail)
            .await?;

        info!(camera = %name, "uploading video for {}", hour);
        let caption = camera::caption(&name, &hour);
        uploader
            .upload_clip(&config.ffmpeg.path_video, &config.ffmpeg.path_thumbnail, &caption)
            .await?;
        info!(camera = %name, "video for {} is uploaded", hour);
    }

    cleanup(&[
        config.ffmpeg.path_video.as_path(),
        config.ffmpeg.path_thumbnail.as_path(),
        config.ffmpeg.path_list.as_path(),
    ])
    .await?;

    Ok(())
}

/// List the camera's segment files in lexicographic name order.
///
/// Returns `None` when the hour directory does not exist; that is the only
/// tolerated per-camera condition. Non-regular entries are excluded.
async fn list_segments(dir: &Path) -> io::Result<Option<Vec<PathBuf>>> {
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    // String sort; the recorder zero-pads segment names so this matches
    // chronological order.
    names.sort_unstable();

    Ok(Some(names.into_iter().map(|name| dir.join(name)).collect()))
}

/// Best-effort removal of the transient artifacts; missing files are fine.
async fn cleanup(paths: &[&Path]) -> io::Result<()> {
    for path in paths {
        match fs::remove_file(path).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
