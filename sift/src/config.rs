//! Configuration for sift.
//!
//! Config file resolution order:
//! 1. Explicit path passed to Config::load_from()
//! 2. SIFT_CONFIG environment variable
//! 3. Default: <platform config dir>/sift/sift.toml

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::operators::OperatorCatalog;
use crate::term::QueryTermParser;
use crate::{Error, Result};

/// Name of the config file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "sift.toml";

/// Top-level sift configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Columns no model may be searched by.
    #[serde(default)]
    pub global_forbidden_columns: Vec<String>,

    /// Operator tokens in match order (None = built-in defaults).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operators: Option<Vec<String>>,

    /// Per-model column catalogs keyed by model name.
    #[serde(default)]
    pub models: BTreeMap<String, ModelConfig>,
}

/// Column catalog for a single model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Name callers use to address the primary key.
    #[serde(default = "default_primary_key_alias")]
    pub primary_key_alias: String,

    /// Canonical primary column the alias resolves to.
    #[serde(default = "default_primary_column")]
    pub primary_column: String,

    /// Model-specific additions to the global forbidden list.
    #[serde(default)]
    pub forbidden_columns: Vec<String>,

    /// Column name to declared type.
    #[serde(default)]
    pub columns: BTreeMap<String, String>,
}

fn default_primary_key_alias() -> String {
    "id".to_string()
}

fn default_primary_column() -> String {
    "id".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            primary_key_alias: default_primary_key_alias(),
            primary_column: default_primary_column(),
            forbidden_columns: Vec::new(),
            columns: BTreeMap::new(),
        }
    }
}

impl ModelConfig {
    /// Set the primary-key alias and the canonical column it maps to.
    pub fn with_primary_key(mut self, alias: impl Into<String>, column: impl Into<String>) -> Self {
        self.primary_key_alias = alias.into();
        self.primary_column = column.into();
        self
    }

    /// Declare a column and its type.
    pub fn with_column(mut self, name: impl Into<String>, column_type: impl Into<String>) -> Self {
        self.columns.insert(name.into(), column_type.into());
        self
    }

    /// Add model-specific forbidden columns.
    pub fn with_forbidden<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_columns.extend(columns.into_iter().map(Into::into));
        self
    }
}

impl Config {
    /// Load config using default path resolution, or defaults if absent.
    pub fn load() -> Result<Self> {
        let path = resolve_config_path()?;
        Self::load_from(&path)
    }

    /// Load config from a specific file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::from_toml_str(&contents)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save config to the given file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Look up a model catalog by name.
    pub fn model(&self, name: &str) -> Result<&ModelConfig> {
        self.models
            .get(name)
            .ok_or_else(|| Error::UnknownModel(name.to_string()))
    }

    /// Operator catalog from the configured tokens, validated against
    /// shadowing. Falls back to the built-in defaults.
    pub fn operator_catalog(&self) -> Result<OperatorCatalog> {
        match &self.operators {
            Some(tokens) => OperatorCatalog::new(tokens.iter().cloned()),
            None => Ok(OperatorCatalog::default()),
        }
    }

    /// Parser carrying this config's global forbidden list.
    pub fn parser(&self) -> QueryTermParser {
        QueryTermParser::new(self.global_forbidden_columns.clone())
    }
}

/// Resolve the config file path using the standard resolution order.
pub fn resolve_config_path() -> Result<PathBuf> {
    // 1. Environment variable
    if let Ok(path) = std::env::var("SIFT_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    // 2. Platform config directory
    if let Some(proj_dirs) = ProjectDirs::from("", "", "sift") {
        return Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME));
    }

    // 3. Fallback to ~/.config/sift
    let home = std::env::var("HOME")
        .map_err(|_| Error::Config("Could not determine home directory".to_string()))?;
    Ok(PathBuf::from(home).join(".config/sift").join(CONFIG_FILE_NAME))
}
