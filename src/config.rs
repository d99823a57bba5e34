//! Configuration module
//!
//! Loaded from a TOML file (override the path with `HOTELS_CONFIG`);
//! missing sections fall back to defaults so a partial file is fine.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::application::reference::{
    DEFAULT_ALPHABET, DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN_LENGTH,
};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingConfig,
    pub booking: BookingConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// Connection URL; `DATABASE_URL` wins when set
    pub url: String,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: "sqlite://./hotels.db?mode=rwc".to_string(),
        }
    }
}

impl DatabaseSection {
    pub fn connection_url(&self) -> String {
        std::env::var("DATABASE_URL").unwrap_or_else(|_| self.url.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Alphabet used by the reference encoder
    pub reference_alphabet: String,
    pub reference_min_length: u8,
    /// Collision redraw cap before the generator gives up
    pub reference_max_attempts: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            reference_alphabet: DEFAULT_ALPHABET.to_string(),
            reference_min_length: DEFAULT_MIN_LENGTH,
            reference_max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Populate an empty database with development data on startup
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        toml::from_str(&raw).map_err(|e| format!("cannot parse {}: {}", path.display(), e))
    }
}

/// Default config file location, e.g. `~/.config/hotels-service/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hotels-service")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────
