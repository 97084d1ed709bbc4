//! Configuration file handling for schema sources.
//!
//! This module provides loading and parsing of `.schema_export.json` configuration files.
//! Supports every schema source via a structured JSON format.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::db::{DatabaseConfig, PostgresConfig};

pub const CONFIG_FILE_NAME: &str = ".schema_export.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson { path: String, message: String },
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Schema source configuration
    pub database: DatabaseConfigFile,
}

/// Schema source variants.
///
/// JSON format uses a "type" field with lowercase variant names:
///
/// ```json
/// {"database": {"type": "postgres", "host": "localhost", "user": "me",
///               "database": "graphs", "graph_name": "social"}}
/// {"database": {"type": "dump", "path": "./schema-dump.json"}}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DatabaseConfigFile {
    /// PostgreSQL with Apache AGE
    Postgres(PostgresConfig),
    /// Captured schema procedure output
    Dump { path: PathBuf },
}

impl ConfigFile {
    /// Load `.schema_export.json` from the current directory, if there is one.
    pub fn load_if_present() -> Result<Option<Self>, ConfigError> {
        let path = Path::new(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(path).map(Some)
    }

    /// Load and parse a configuration file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidJson {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

impl DatabaseConfigFile {
    /// Convert this configuration to a DatabaseConfig.
    pub fn to_database_config(&self) -> DatabaseConfig {
        match self {
            Self::Postgres(pg_config) => DatabaseConfig::Postgres(pg_config.clone()),
            Self::Dump { path } => DatabaseConfig::Dump { path: path.clone() },
        }
    }
}
