//! Shared data models for frigate-sync.
//!
//! This crate provides:
//! - Hour-bucket parsing and path/caption formatting
//! - Camera naming and segment directory layout

pub mod camera;
pub mod hour;

// Re-export common types
pub use camera::{caption, hashtag_name, segment_dir, HOURLY_TAG};
pub use hour::{HourBucket, HourParseError};
