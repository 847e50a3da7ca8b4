//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Config file (doorman.toml, or an explicit path)
//! 3. Environment variables (DOORMAN_* prefix)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::Path;

use tracing::debug;

use super::types::Config;
use crate::types::{DoormanError, Result};

/// Default config file looked up in the working directory.
const DEFAULT_CONFIG_FILE: &str = "doorman.toml";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with the full resolution chain:
    /// defaults → file → env vars.
    pub fn load() -> Result<Config> {
        Self::load_from_file(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration using a specific config file path. A missing file
    /// is not an error; defaults and environment variables still apply.
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if path.exists() {
            debug!("loading config from: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("DOORMAN_").split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| DoormanError::Config(format!("configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }
}
