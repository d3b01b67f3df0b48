//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/taxo/taxo.toml`
//! 3. Environment variables: `TAXO_*` prefix

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// User-facing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Where the taxonomy snapshot lives
    pub store_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

/// Default snapshot location: `$XDG_DATA_HOME/taxo/taxonomy.toml`,
/// falling back to the working directory when no home is resolvable.
pub fn default_store_path() -> PathBuf {
    ProjectDirs::from("", "", "taxo")
        .map(|dirs| dirs.data_dir().join("taxonomy.toml"))
        .unwrap_or_else(|| PathBuf::from("taxonomy.toml"))
}

/// Global config file location, if a home directory is resolvable.
pub fn config_file_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "taxo").map(|dirs| dirs.config_dir().join("taxo.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, ApplicationError> {
        let mut builder = Config::builder().set_default(
            "store_path",
            default_store_path().to_string_lossy().to_string(),
        )
        .map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })?;

        if let Some(path) = config_file_path() {
            if path.exists() {
                builder = builder.add_source(File::from(path));
            }
        }

        builder = builder.add_source(Environment::with_prefix("TAXO"));

        builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| ApplicationError::Config {
                message: e.to_string(),
            })
    }
}
