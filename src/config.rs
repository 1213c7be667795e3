//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/vineyard/vineyard.toml`
//! 3. Local config: `<dir>/.vineyard.toml` (usually the working directory)
//! 4. Environment variables: `VINEYARD_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::services::ExportView;
use crate::application::ApplicationError;
use crate::domain::expand_env_vars;

/// CSV export file names, one per dashboard page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExportConfig {
    pub plantings_file: String,
    pub blocks_file: String,
    pub varietals_file: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            plantings_file: "vineyard-plantings.csv".into(),
            blocks_file: "vineyard-blocks.csv".into(),
            varietals_file: "vineyard-varietals.csv".into(),
        }
    }
}

impl ExportConfig {
    pub fn file_name(&self, view: ExportView) -> &str {
        match view {
            ExportView::Plantings => &self.plantings_file,
            ExportView::Blocks => &self.blocks_file,
            ExportView::Varietals => &self.varietals_file,
        }
    }

    fn merge(&self, overlay: &RawExportConfig) -> Self {
        Self {
            plantings_file: overlay
                .plantings_file
                .clone()
                .unwrap_or_else(|| self.plantings_file.clone()),
            blocks_file: overlay
                .blocks_file
                .clone()
                .unwrap_or_else(|| self.blocks_file.clone()),
            varietals_file: overlay
                .varietals_file
                .clone()
                .unwrap_or_else(|| self.varietals_file.clone()),
        }
    }
}

/// Raw export config for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawExportConfig {
    pub plantings_file: Option<String>,
    pub blocks_file: Option<String>,
    pub varietals_file: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub dataset: Option<PathBuf>,
    pub items: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
    #[serde(default)]
    pub export: RawExportConfig,
}

/// Unified configuration for vineyard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Planting dataset: JSON array of `block.varietal.clone` strings
    pub dataset: PathBuf,
    /// Item list: JSON array of `{name, isExpired}` objects
    pub items: PathBuf,
    /// Directory CSV exports are written to
    pub export_dir: PathBuf,
    pub export: ExportConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("data/plantings.json"),
            items: PathBuf::from("items.json"),
            export_dir: PathBuf::from("."),
            export: ExportConfig::default(),
        }
    }
}

/// Get the XDG config directory for vineyard.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "vineyard").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("vineyard.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".vineyard.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Path of the CSV file for an export view.
    pub fn export_path(&self, view: ExportView) -> PathBuf {
        self.export_dir.join(self.export.file_name(view))
    }

    /// Expand shell variables and tilde in path fields.
    fn expand_paths(&mut self) {
        for path in [&mut self.dataset, &mut self.items, &mut self.export_dir] {
            *path = PathBuf::from(expand_env_vars(path.to_string_lossy().as_ref()));
        }
    }

    /// Overlay wins where it specifies a value, otherwise keep self.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            dataset: overlay
                .dataset
                .clone()
                .unwrap_or_else(|| self.dataset.clone()),
            items: overlay.items.clone().unwrap_or_else(|| self.items.clone()),
            export_dir: overlay
                .export_dir
                .clone()
                .unwrap_or_else(|| self.export_dir.clone()),
            export: self.export.merge(&overlay.export),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.vineyard.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply VINEYARD_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("VINEYARD")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("dataset") {
            settings.dataset = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("items") {
            settings.items = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("export_dir") {
            settings.export_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("export.plantings_file") {
            settings.export.plantings_file = val;
        }
        if let Ok(val) = config.get_string("export.blocks_file") {
            settings.export.blocks_file = val;
        }
        if let Ok(val) = config.get_string("export.varietals_file") {
            settings.export.varietals_file = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# vineyard configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/vineyard/vineyard.toml
#   Local:  ./.vineyard.toml
#   Env:    VINEYARD_* environment variables (e.g. VINEYARD_DATASET, VINEYARD_EXPORT__BLOCKS_FILE)

# Planting dataset: JSON array of "block.varietal.clone" strings
# dataset = "data/plantings.json"

# Item list: JSON array of {"name": ..., "isExpired": ...}
# items = "items.json"

# Directory for CSV exports
# export_dir = "."

[export]
# plantings_file = "vineyard-plantings.csv"
# blocks_file = "vineyard-blocks.csv"
# varietals_file = "vineyard-varietals.csv"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
