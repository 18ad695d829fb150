//! Application configuration read from YAML.
//!
//! ```yaml
//! logger:
//!   enable: true
//!   level: debug
//!   format: json
//! ontology:
//!   source:
//!     kind: definition
//!     path: config/ontology.yaml
//! ```

use std::{
    fmt,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logger: LoggerSettings,
    #[serde(default)]
    pub ontology: OntologySettings,
}

impl Config {
    /// Reads configuration from a YAML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Logger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Install a subscriber at all.
    #[serde(default = "default_true")]
    pub enable: bool,
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub format: LogFormat,
    /// Raw filter directives replacing `level` and `RUST_LOG`, e.g. `aif_ontology=trace`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_filter: Option<String>,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            enable: true,
            level: LogLevel::default(),
            format: LogFormat::default(),
            override_filter: None,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Off => "off",
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

/// Selects which ontology backs the [`crate::ontology::OntologyService`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologySettings {
    #[serde(default)]
    pub source: OntologySource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OntologySource {
    /// The built-in ColdStart ontology.
    #[default]
    ColdStart,
    /// A YAML or JSON ontology definition file.
    Definition { path: PathBuf },
}
