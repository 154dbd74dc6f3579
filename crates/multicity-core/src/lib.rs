// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Multicity contributors

pub mod catalog;
pub mod config;
pub mod editor;
pub mod format;
pub mod price;
pub mod route;
pub mod stop;
pub mod summary;
pub mod timeline;

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

pub use route::RouteStore;
pub use stop::{Stop, StopId, Weather};

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Insert index {index} is out of bounds for a route of {len} stops")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings file: {0}")]
    Config(#[from] serde_json::Error),
}

/// Directory holding `settings.json`.
///
/// Falls back to the working directory when the platform has no notion of a
/// per-user config folder.
pub fn get_config_root() -> PathBuf {
    ProjectDirs::from("org", "multicity", "multicity")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
