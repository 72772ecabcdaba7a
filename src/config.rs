// config.rs - Application Settings
//
// Read-only settings from `<config_dir>/AnalogClock/settings.json`, with
// command line overrides. Nothing is ever written back.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::assets::AssetSource;
use crate::clock::SelectionMetric;
use crate::constants::window;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Edge length of the square clock widget
    pub clock_size: u32,
    /// Directory holding the five PNG files, builtin artwork when unset
    pub asset_dir: Option<PathBuf>,
    /// How the nearer hand is picked on touch
    pub selection_metric: SelectionMetric,
    /// Font size of the time readout
    pub label_size: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            clock_size: window::DEFAULT_CLOCK_SIZE,
            asset_dir: None,
            selection_metric: SelectionMetric::Circular,
            label_size: window::DEFAULT_LABEL_SIZE,
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("AnalogClock")
            .join("settings.json")
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            info!("No settings file at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                info!("Settings loaded from {:?}", path);
                settings
            }
            Err(e) => {
                error!("Failed to load settings: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;
        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file {:?}", path))?;
        Ok(settings.sanitized())
    }

    /// Apply `--assets <dir>` and `--linear-selection`
    pub fn apply_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--assets" | "-a" => match args.next() {
                    Some(dir) => self.asset_dir = Some(PathBuf::from(dir.as_ref())),
                    None => warn!("--assets needs a directory argument"),
                },
                "--linear-selection" => self.selection_metric = SelectionMetric::Linear,
                other => warn!("Ignoring unknown argument {:?}", other),
            }
        }
        self
    }

    /// Clamp values that would make the window unusable
    fn sanitized(mut self) -> Self {
        let clamped = self
            .clock_size
            .clamp(window::MIN_CLOCK_SIZE, window::MAX_CLOCK_SIZE);
        if clamped != self.clock_size {
            warn!("clock_size {} out of range, using {}", self.clock_size, clamped);
            self.clock_size = clamped;
        }
        self
    }

    pub fn asset_source(&self) -> AssetSource {
        match &self.asset_dir {
            Some(dir) => AssetSource::Directory(dir.clone()),
            None => AssetSource::Builtin,
        }
    }
}
