//! Hourly clip sync worker.
//!
//! This crate provides:
//! - Settings loading for a sync run
//! - The per-camera pipeline: list → manifest → concat → thumbnail → upload
//! - End-of-run cleanup of transient artifacts

pub mod config;
pub mod error;
pub mod sync;

pub use config::SyncConfig;
pub use error::{WorkerError, WorkerResult};
