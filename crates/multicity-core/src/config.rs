// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Multicity contributors

use crate::PlannerError;
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const MIN_STAY_DAYS: u32 = 1;
pub const MAX_STAY_DAYS: u32 = 30;

/// User settings read from `settings.json`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Stay length the editor starts with when adding a city.
    pub default_stay_days: u32,
    /// How long the search notification stays on screen.
    pub toast_duration_ms: u64,
    pub log_level: String,
    pub dark_theme: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_stay_days: 3,
            toast_duration_ms: 4000,
            log_level: "info".to_string(),
            dark_theme: true,
        }
    }
}

impl PlannerConfig {
    pub fn config_path() -> PathBuf {
        crate::get_config_root().join("settings.json")
    }

    /// Reads `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, PlannerError> {
        if !path.exists() {
            debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        debug!("Loaded settings from {:?}", path);
        Ok(config)
    }

    /// Like [`load`](Self::load), but a broken file is logged and replaced by
    /// the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            error!("Ignoring settings file {:?}: {}", path, e);
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), PlannerError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Initial stay for new stops, kept inside the editor's range.
    pub fn initial_stay(&self) -> u32 {
        self.default_stay_days.clamp(MIN_STAY_DAYS, MAX_STAY_DAYS)
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
