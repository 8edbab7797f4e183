use config::{Config as ConfigLoader, Environment, File, FileFormat};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::Error;

/// Largest graph the runner will allocate, whether the vertex count comes
/// from the config, the command line or a CSV file.
pub const MAX_VERTEX_COUNT: usize = 1 << 24;

/// Parameters of the seeded random graph.
#[derive(Debug, Deserialize, Clone)]
pub struct GraphConfig {
    pub vertex_count: usize,
    /// Endpoint pairs drawn before self-loops and duplicates are filtered out.
    pub edge_attempts: usize,
    pub weight_min: i64,
    pub weight_max: i64,
    pub seed: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QueryConfig {
    pub source: usize,
    #[serde(default)]
    pub target: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub graph: GraphConfig,
    pub query: QueryConfig,
}

impl Config {
    /// Rejects settings the random generator cannot work with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.graph.vertex_count == 0 {
            return Err(Error::InvalidConfig(
                "graph.vertex_count must be at least 1".to_string(),
            ));
        }
        if self.graph.vertex_count > MAX_VERTEX_COUNT {
            return Err(Error::InvalidConfig(format!(
                "graph.vertex_count ({}) exceeds the limit of {}",
                self.graph.vertex_count, MAX_VERTEX_COUNT
            )));
        }
        if self.graph.weight_min > self.graph.weight_max {
            return Err(Error::InvalidConfig(format!(
                "graph.weight_min ({}) exceeds graph.weight_max ({})",
                self.graph.weight_min, self.graph.weight_max
            )));
        }
        Ok(())
    }
}

/// `crates/runner/Config.toml` under the current working directory.
pub fn default_config_path() -> Result<PathBuf, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    Ok(base_path.join("crates").join("runner").join("Config.toml"))
}

/// Loads configuration from a TOML file, overridden by `RUNNER__*` environment
/// variables (e.g. `RUNNER__QUERY__SOURCE=2`).
pub fn load_config(config_file_path: &Path) -> Result<Config, Error> {
    if !config_file_path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at path: {}",
            config_file_path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(
            File::from(config_file_path)
                .format(FileFormat::Toml)
                .required(true),
        )
        .add_source(
            Environment::with_prefix("RUNNER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}
