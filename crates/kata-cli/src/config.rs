//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only ever sees the resulting
//! [`ProjectLayout`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. `--config FILE` (must exist when given)
//! 2. `<root>/.kata.toml`
//! 3. `config.toml` in the platform config directory
//! 4. Built-in defaults
//!
//! Environment variables are deliberately not a source: a kata session
//! should look the same no matter which shell it was started from.

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use kata_core::domain::{ProjectLayout, RelativePath};

use crate::error::{CliError, CliResult};

/// Per-project config file, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = ".kata.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub layout: LayoutConfig,
    pub output: OutputConfig,
}

/// Where generated files go, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub source_dir: String,
    pub doc_file: String,
    pub index_html: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            source_dir: "src".into(),
            doc_file: "KATA.md".into(),
            index_html: "index.html".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Layer every config source over the defaults.
    pub fn load(config_file: Option<&Path>, root: &Path) -> CliResult<Self> {
        let mut builder = Config::builder();

        if let Some(global) = Self::global_config_path() {
            debug!(path = %global.display(), "Global config candidate");
            builder = builder.add_source(toml_file(global).required(false));
        }

        builder = builder.add_source(toml_file(root.join(PROJECT_CONFIG_FILE)).required(false));

        if let Some(path) = config_file {
            debug!(path = %path.display(), "Explicit config file");
            builder = builder.add_source(toml_file(path).required(true));
        }

        let config = builder
            .build()
            .and_then(|c| c.try_deserialize::<AppConfig>())
            .map_err(|e| CliError::ConfigError {
                message: format!("Failed to load configuration: {e}"),
                source: Some(Box::new(e)),
            })?;

        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Platform config file, e.g. `~/.config/init-kata/config.toml`.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "kata", "init-kata")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Turn the `[layout]` table into a layout rooted at `root`.
    pub fn project_layout(&self, root: impl Into<PathBuf>) -> CliResult<ProjectLayout> {
        let layout = &self.layout;
        Ok(ProjectLayout::new(root)
            .with_source_dir(relative("layout.source_dir", &layout.source_dir)?)
            .with_doc_file(relative("layout.doc_file", &layout.doc_file)?)
            .with_index_html(relative("layout.index_html", &layout.index_html)?))
    }
}

/// Every config file is TOML, whatever its extension.
fn toml_file(path: impl Into<PathBuf>) -> File<config::FileSourceFile, FileFormat> {
    File::from(path.into()).format(FileFormat::Toml)
}

fn relative(key: &str, value: &str) -> CliResult<RelativePath> {
    RelativePath::try_new(value).map_err(|path| CliError::ConfigError {
        message: format!(
            "{key} must be a relative path inside the project root, got '{}'",
            path.display()
        ),
        source: None,
    })
}
