//! Configuration for the typegen pipeline
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (typegen.toml)
//! - Environment variables (TYPEGEN_*)
//!
//! ## Example config file (typegen.toml):
//! ```toml
//! [catalog]
//! dir = "catalog"
//! index_file = "index.json"
//!
//! [output]
//! types_dir = "dist/types"
//! ```
//!
//! The allow-list of target schemas and the bootstrap module name are
//! compile-time constants, not configuration.

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the typegen pipeline
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TypegenConfig {
    /// Catalog input settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Catalog input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding the built catalog file tree
    #[serde(default = "default_catalog_dir")]
    pub dir: PathBuf,

    /// Root index file name within the catalog directory
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the generated declaration files are written to
    #[serde(default = "default_types_dir")]
    pub types_dir: PathBuf,
}

fn default_catalog_dir() -> PathBuf {
    PathBuf::from("catalog")
}

fn default_index_file() -> String {
    "index.json".to_string()
}

fn default_types_dir() -> PathBuf {
    PathBuf::from("dist/types")
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dir: default_catalog_dir(),
            index_file: default_index_file(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            types_dir: default_types_dir(),
        }
    }
}

impl TypegenConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = ["typegen.toml", ".typegen.toml", "config/typegen.toml"];
        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(config_dir) = directories::ProjectDirs::from("dev", "catalog", "typegen") {
            let xdg_config = config_dir.config_dir().join("typegen.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("TYPEGEN")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Path to the root catalog index file
    pub fn root_index_path(&self) -> PathBuf {
        self.catalog.dir.join(&self.catalog.index_file)
    }
}
