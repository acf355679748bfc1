//! FFmpeg CLI wrapper for hourly clip assembly.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building
//! - Concat-manifest writing and stream-copy concatenation
//! - Single-frame thumbnail extraction

pub mod command;
pub mod concat;
pub mod error;
pub mod thumbnail;
pub mod transcoder;

pub use command::{FfmpegCommand, FfmpegRunner};
pub use concat::{concatenate, write_manifest};
pub use error::{MediaError, MediaResult};
pub use thumbnail::extract_frame;
pub use transcoder::{FfmpegTranscoder, Transcoder};
