//! Server configuration
//!
//! Loaded from `<config dir>/soloflow/config.toml` (or an explicit path) and
//! overridden by command-line flags. Every field has a default, so a missing
//! file or a partial file is fine.
//!
//! ```toml
//! log_level = "debug"
//! allowed_roots = ["/home/me/projects"]
//!
//! [http]
//! host = "127.0.0.1"
//! port = 3000
//! ```

use crate::services::DocumentStore;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Default tracing filter when `RUST_LOG` is not set
    pub log_level: String,

    /// HTTP transport settings
    pub http: HttpConfig,

    /// When non-empty, project roots must live under one of these directories
    pub allowed_roots: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            http: HttpConfig::default(),
            allowed_roots: Vec::new(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// `<config dir>/soloflow/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("soloflow").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used when present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(default) if default.is_file() => Self::from_file(&default),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ServerConfig = toml::from_str(content)?;
        for root in &config.allowed_roots {
            if !root.is_absolute() {
                anyhow::bail!("allowed_roots entries must be absolute: {}", root.display());
            }
        }
        Ok(config)
    }

    /// Document store honouring `allowed_roots`
    pub fn document_store(&self) -> DocumentStore {
        DocumentStore::with_allowed_roots(self.allowed_roots.clone())
    }
}
