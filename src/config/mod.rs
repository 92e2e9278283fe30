// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_atlas::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.map.style = "mapbox/outdoors-v12".to_string();
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use crate::icons::StyleDefaults;
use crate::ui::toasts::Options as ToastOptions;
use defaults::{DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON, DEFAULT_MAP_STYLE, DEFAULT_MAP_ZOOM};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedAtlas";

/// Tile source and initial viewport settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// API access token for the tile provider, if the style needs one.
    pub access_token: Option<String>,
    /// Style identifier in `provider/style-name` form.
    pub style: String,
    /// Initial viewport center, longitude (degrees).
    pub center_lon: f64,
    /// Initial viewport center, latitude (degrees).
    pub center_lat: f64,
    /// Initial viewport zoom level.
    pub zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            style: DEFAULT_MAP_STYLE.to_string(),
            center_lon: DEFAULT_CENTER_LON,
            center_lat: DEFAULT_CENTER_LAT,
            zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

/// Persisted application settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tile source and initial viewport.
    pub map: MapConfig,
    /// Toast presentation options.
    pub toasts: ToastOptions,
    /// Default icon family/style for registrations without a variant.
    pub icons: StyleDefaults,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Resolves the settings file inside an explicit config directory, used by
/// the `--config-dir` launcher override.
#[must_use]
pub fn config_path_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
