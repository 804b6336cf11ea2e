//! Host configuration module.
//!
//! Handles loading, validating, and merging `photostats.toml`. Stock defaults
//! are the base layer; a user file in the config directory overrides them
//! key by key.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [colors]
//! panel = "#ffffff"         # Panel and canvas background
//! text = "#191611"          # Stat values, camera name, brand line
//! label = "#4b463e"         # Stat labels
//!
//! [font]
//! family = "Inter"          # Reported to hosts that render the instructions
//! average_advance = 0.55    # Mean glyph advance as a share of the font size
//! weight_spread = 0.02      # Advance change per 100 units of font weight
//!
//! [logos]
//! directory = "logos"       # Relative to the config directory
//!
//! [processing]
//! max_processes = 4         # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [colors]
//! panel = "#f4f1ea"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::layout::Palette;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the config directory.
pub const CONFIG_FILE: &str = "photostats.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `photostats.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhotostatsConfig {
    /// Panel colors.
    pub colors: Palette,
    /// Font used to measure and render panel text.
    pub font: FontConfig,
    /// Where logo artwork lives.
    pub logos: LogosConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl PhotostatsConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("colors.panel", &self.colors.panel),
            ("colors.text", &self.colors.text),
            ("colors.label", &self.colors.label),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        if !(self.font.average_advance > 0.0 && self.font.average_advance <= 2.0) {
            return Err(ConfigError::Validation(
                "font.average_advance must be in (0, 2]".into(),
            ));
        }
        if !(0.0..0.5).contains(&self.font.weight_spread) {
            return Err(ConfigError::Validation(
                "font.weight_spread must be in [0, 0.5)".into(),
            ));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Logo directory, resolved against the config directory when relative.
    pub fn logo_dir(&self, config_dir: &Path) -> PathBuf {
        let dir = Path::new(&self.logos.directory);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            config_dir.join(dir)
        }
    }
}

/// Font settings for approximate text measurement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    pub family: String,
    /// Mean glyph advance at weight 400, as a fraction of the font size.
    pub average_advance: f64,
    /// How much the advance grows per 100 units of weight above 400.
    pub weight_spread: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Inter".to_string(),
            average_advance: 0.55,
            weight_spread: 0.02,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogosConfig {
    pub directory: String,
}

impl Default for LogosConfig {
    fn default() -> Self {
        Self {
            directory: "logos".to_string(),
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel decode workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(PhotostatsConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `photostats.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist, `Err` if it exists but
/// contains invalid TOML.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<PhotostatsConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: PhotostatsConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `photostats.toml` in the given directory.
pub fn load_config(dir: &Path) -> Result<PhotostatsConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `photostats.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Photostats Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file as photostats.toml in the config directory
# (the working directory, or the one passed with --config).
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Panel colors (any CSS color string)
# ---------------------------------------------------------------------------
[colors]
# Panel background; also fills the canvas behind the photo.
panel = "#ffffff"

# Stat values, camera name, brand and lens text, divider.
text = "#191611"

# Stat labels ("f", "shutter speed", "mm", "ISO").
label = "#4b463e"

# ---------------------------------------------------------------------------
# Font
# ---------------------------------------------------------------------------
[font]
# Family reported with every layout; hosts render text in this family.
family = "Inter"

# Mean glyph advance at weight 400, as a fraction of the font size.
# Used to estimate text widths when fitting the camera name.
average_advance = 0.55

# Additional advance per 100 units of weight above 400 (less below 400).
weight_spread = 0.02

# ---------------------------------------------------------------------------
# Logo artwork
# ---------------------------------------------------------------------------
[logos]
# Directory holding Apple.png, Fujifilm.png, Leica.png, Sigma.png, Sony.png
# and Zeiss.png. Relative paths are resolved against the config directory.
# Missing files fall back to text.
directory = "logos"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel decode workers for `scan`.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
