//! Configuration file
//!
//! ```json
//! {
//!   "data_file": "./patients.json",
//!   "serialize_writes": true,
//!   "server": { "host": "0.0.0.0", "port": 8000, "cors_origins": [] }
//! }
//! ```
//!
//! Every field is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// JSON file holding the patient collection
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Serialize load/mutate/save of concurrent writes
    #[serde(default = "default_serialize_writes")]
    pub serialize_writes: bool,

    #[serde(default)]
    pub server: HttpServerConfig,
}

fn default_data_file() -> String {
    "./patients.json".to_string()
}

fn default_serialize_writes() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            serialize_writes: default_serialize_writes(),
            server: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_file.trim().is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        self.server.validate().map_err(CliError::config_error)
    }

    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_file)
    }
}
