//! Configuration management for `dojang`.
//!
//! Configuration sources and precedence (highest wins):
//! 1. CLI overrides (`--db`, `--json`)
//! 2. Environment variables (`DOJANG_DB`, `DOJANG_JSON`)
//! 3. Project config (`.dojang/config.yaml` in the working directory)
//! 4. User config (`~/.config/dojang/config.yaml`)
//! 5. Defaults (`taekwondo.db` in the working directory, text output)

use crate::error::Result;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Database filename used when nothing else is configured.
pub const DEFAULT_DB_FILENAME: &str = "taekwondo.db";
/// Project-local configuration directory.
pub const PROJECT_DIR: &str = ".dojang";
const CONFIG_FILENAME: &str = "config.yaml";

pub const DB_ENV: &str = "DOJANG_DB";
pub const JSON_ENV: &str = "DOJANG_JSON";

/// One source of configuration. Unset keys defer to lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub database: Option<PathBuf>,
    pub json: Option<bool>,
}

impl ConfigLayer {
    /// Merge another layer on top of this one (higher precedence wins).
    pub fn merge_from(&mut self, other: &Self) {
        if other.database.is_some() {
            self.database.clone_from(&other.database);
        }
        if other.json.is_some() {
            self.json = other.json;
        }
    }

    /// Merge multiple layers in precedence order (lowest to highest).
    #[must_use]
    pub fn merge_layers(layers: &[Self]) -> Self {
        let mut merged = Self::default();
        for layer in layers {
            merged.merge_from(layer);
        }
        merged
    }

    /// Build a layer from a YAML file path. Missing or empty files return an
    /// empty layer.
    ///
    /// A relative `database` path is resolved against the directory holding
    /// the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn from_yaml(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut layer: Self = serde_yaml::from_str(&contents)?;
        if let (Some(db), Some(dir)) = (layer.database.as_mut(), path.parent()) {
            if db.is_relative() {
                *db = dir.join(&*db);
            }
        }
        debug!(path = %path.display(), ?layer, "Loaded config file");
        Ok(layer)
    }

    /// Build a layer from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = lookup(DB_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let json = lookup(JSON_ENV).as_deref().and_then(parse_bool);
        Self { database, json }
    }
}

/// CLI overrides for config loading.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub db: Option<PathBuf>,
    pub json: bool,
}

impl CliOverrides {
    #[must_use]
    pub fn as_layer(&self) -> ConfigLayer {
        ConfigLayer {
            database: self.db.clone(),
            json: self.json.then_some(true),
        }
    }
}

/// Load project config (`<root>/.dojang/config.yaml`).
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_project_config(project_root: &Path) -> Result<ConfigLayer> {
    ConfigLayer::from_yaml(&project_root.join(PROJECT_DIR).join(CONFIG_FILENAME))
}

/// Load user config (`~/.config/dojang/config.yaml`). Without `HOME` there is
/// no user layer.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<ConfigLayer> {
    let Ok(home) = env::var("HOME") else {
        return Ok(ConfigLayer::default());
    };
    let path = Path::new(&home)
        .join(".config")
        .join("dojang")
        .join(CONFIG_FILENAME);
    ConfigLayer::from_yaml(&path)
}

/// Settings after every layer has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_path: PathBuf,
    pub json: bool,
}

impl Settings {
    fn from_layer(project_root: &Path, layer: ConfigLayer) -> Self {
        Self {
            db_path: layer
                .database
                .unwrap_or_else(|| project_root.join(DEFAULT_DB_FILENAME)),
            json: layer.json.unwrap_or(false),
        }
    }
}

/// Load configuration with the documented precedence order.
///
/// # Errors
///
/// Returns an error if any config file cannot be read or parsed.
pub fn load_settings(project_root: &Path, cli: &CliOverrides) -> Result<Settings> {
    let merged = ConfigLayer::merge_layers(&[
        load_user_config()?,
        load_project_config(project_root)?,
        ConfigLayer::from_env(),
        cli.as_layer(),
    ]);
    Ok(Settings::from_layer(project_root, merged))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
