mod defaults;
mod io;
mod types;
mod validation;

pub use defaults::*;
pub use io::*;
pub use types::*;
pub use validation::*;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::media::StaticSignals;

/// Top-level media-constraints configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub signals: StaticSignals,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file.
    File(PathBuf),
    /// The requested file does not exist; defaults were used.
    Missing(PathBuf),
    /// No file was requested or found; defaults were used.
    Defaults,
}

impl ConfigSource {
    /// Report the source once a subscriber is installed.
    pub fn log(&self) {
        match self {
            Self::File(p) => info!("Loaded config from {}", p.display()),
            Self::Missing(p) => warn!("Config file {} not found, using defaults", p.display()),
            Self::Defaults => info!("No config file found, using defaults"),
        }
    }
}

impl Config {
    /// Load configuration from file, environment, and defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let (config, source) = Self::load_with_source(path)?;
        source.log();
        Ok(config)
    }

    /// Load configuration without logging, returning where it came from.
    ///
    /// Callers that install logging from the loaded configuration report the
    /// source afterwards with [`ConfigSource::log`].
    pub fn load_with_source(path: Option<&str>) -> Result<(Self, ConfigSource)> {
        let config_path = path.map(PathBuf::from).or_else(find_config_file);

        let (mut config, source) = match config_path {
            Some(p) if p.exists() => (read_config_file(&p)?, ConfigSource::File(p)),
            Some(p) => (Config::default(), ConfigSource::Missing(p)),
            None => (Config::default(), ConfigSource::Defaults),
        };

        config.apply_env_overrides();

        Ok((config, source))
    }

    /// Write default configuration to a file.
    pub fn write_default(path: &str) -> Result<()> {
        write_config_file(std::path::Path::new(path), &Config::default())
    }

    /// Apply environment variable overrides to the configuration.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from a variable lookup; unparseable values are ignored.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let bool_var = |name: &str| lookup(name).and_then(|v| parse_bool(&v));
        let u64_var = |name: &str| lookup(name).and_then(|v| v.trim().parse::<u64>().ok());
        let signals = &mut self.signals;

        if let Some(v) = bool_var("MEDIA_LOW_MEMORY") {
            signals.low_memory = v;
        }

        if let Some(v) = bool_var("MEDIA_CAN_ENCODE_HEVC") {
            signals.can_encode_hevc = v;
        }

        if let Some(v) = bool_var("MEDIA_HEVC_REMOTE") {
            signals.hevc_remote_enabled = v;
        }

        if let Some(v) = bool_var("MEDIA_HEVC_INTERNAL") {
            signals.hevc_internal_override = v;
        }

        if let Some(level) = lookup("MEDIA_QUALITY_LEVEL").and_then(|v| v.trim().parse().ok()) {
            signals.remote_quality_level = Some(level);
        }

        if let Some(size) = u64_var("MEDIA_MAX_ATTACHMENT_SIZE") {
            signals.max_attachment_size = size;
        }

        if let Some(v) = bool_var("MEDIA_VIDEO_TRANSCODE") {
            signals.video_transcode_available = v;
        }

        if let Some(size) = u64_var("MEDIA_MAX_SOURCE_TRANSCODE_SIZE") {
            signals.max_source_transcode_video_size = size;
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Find the configuration file in standard locations.
fn find_config_file() -> Option<PathBuf> {
    let candidates = [
        PathBuf::from("media-constraints.json"),
        PathBuf::from("media-constraints.yaml"),
        PathBuf::from("media-constraints.yml"),
        PathBuf::from("media-constraints.toml"),
    ];

    for path in &candidates {
        if path.exists() {
            return Some(path.clone());
        }
    }

    // Check home directory
    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".media-constraints").join("config.json");
        if home_config.exists() {
            return Some(home_config);
        }
    }

    None
}
