//! Application configuration, read from `ambienta.toml`.
//!
//! The file is optional: every field has a default, a missing file means
//! defaults, and a malformed file falls back to defaults with a warning.
//! Lookup order for the path: `--config` flag, `AMBIENTA_CONFIG`
//! environment variable, then `ambienta.toml` in the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable naming an alternative configuration file.
pub const CONFIG_ENV: &str = "AMBIENTA_CONFIG";

const CONFIG_FILENAME: &str = "ambienta.toml";

/// Application settings (persisted as TOML).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientaConfig {
    pub state: StateConfig,
    pub images: ImagesConfig,
    pub compose: ComposeConfig,
    pub payment: PaymentConfig,
    pub handoff: HandoffConfig,
}

/// Where durable state records live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    /// Directory holding one JSON file per record.
    pub dir: PathBuf,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".ambienta"),
        }
    }
}

/// Where room photos are looked up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Base directory of the `<base>/<category>/<category><n>.<ext>` layout.
    pub base_dir: PathBuf,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("ambientes"),
        }
    }
}

/// Mosaic generation defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    /// How many mosaics to generate per run.
    pub count: u32,
    pub tile_width: u32,
    pub tile_height: u32,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            count: 3,
            tile_width: 320,
            tile_height: 240,
        }
    }
}

/// Payment backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// Base URL of the preference-creating backend.
    pub base_url: String,
    /// Where the payment provider sends the customer after paying.
    pub success_url: String,
    /// Fee charged to unlock the estimate, in MXN.
    pub amount: f64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            success_url: "http://localhost:3000/gracias".to_string(),
            amount: 99.0,
        }
    }
}

/// Hand-off recipient settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HandoffConfig {
    /// WhatsApp recipient, country code included.
    pub phone: String,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            phone: "5215500000000".to_string(),
        }
    }
}

impl AmbientaConfig {
    /// Resolve the configuration path and load it.
    pub fn load(explicit: Option<PathBuf>) -> Self {
        let path = explicit
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
        Self::load_from(&path)
    }

    /// Load from a concrete path, falling back to defaults on any failure.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "loaded configuration");
                    config
                }
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        "could not parse configuration, using defaults: {err}"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no configuration file, using defaults");
                Self::default()
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    "could not read configuration, using defaults: {err}"
                );
                Self::default()
            }
        }
    }
}
