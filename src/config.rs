//! Configuration for ShelfDB
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a ShelfDB instance
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory for all collection files.
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── books.json       (catalog collection)
    ///     ├── reviews.json     (review collection)
    ///     └── users.json       (user registry)
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./shelfdb_data"),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all collection files)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
