//! stone.toml configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result, error::SourceContext};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "stone.toml";

/// Root schema for stone.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub table: TableConfig,

    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory holding one folder per module (`<entity>/<entity>.model.ts`)
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// Angular date pipe format used for temporal columns
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Expression prefixing the data-access service endpoints
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Wait for a keypress between sections
    #[serde(default = "default_pause")]
    pub pause: bool,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("src/app")
}

fn default_date_format() -> String {
    "short".to_string()
}

fn default_api_url() -> String {
    "environment.apiUrl".to_string()
}

fn default_pause() -> bool {
    true
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pause: default_pause(),
        }
    }
}

impl Config {
    /// Open and parse a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Load `stone.toml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if path.is_file() {
            debug!(path = %path.display(), "loading configuration");
            Self::open(path)
        } else {
            debug!("no {CONFIG_FILE} found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse configuration from a string with a filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SourceContext::new(content, filename).config_error(e))
    }

    /// Conventional model path for an entity: `<source_dir>/<name>/<name>.model.ts`.
    pub fn model_path(&self, entity: &str) -> PathBuf {
        self.project
            .source_dir
            .join(entity)
            .join(format!("{entity}.model.ts"))
    }
}

impl std::str::FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.project.source_dir, PathBuf::from("src/app"));
        assert_eq!(config.table.date_format, "short");
        assert_eq!(config.service.api_url, "environment.apiUrl");
        assert!(config.output.pause);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_str(
            r#"
            [project]
            source_dir = "apps/admin/src/app"

            [table]
            date_format = "dd/MM/yyyy"
            "#,
        )
        .unwrap();

        assert_eq!(config.project.source_dir, PathBuf::from("apps/admin/src/app"));
        assert_eq!(config.table.date_format, "dd/MM/yyyy");
        assert_eq!(config.service.api_url, "environment.apiUrl");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_str("[policy]\nexcluded_fields = []\n").unwrap_err();
        assert!(matches!(*err, Error::Config { .. }));
    }

    #[test]
    fn test_model_path() {
        let config = Config::default();
        assert_eq!(
            config.model_path("product-item"),
            PathBuf::from("src/app/product-item/product-item.model.ts")
        );
    }

    #[test]
    fn test_discover_without_file() {
        let temp = TempDir::new().unwrap();
        assert_eq!(Config::discover(temp.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_discover_reads_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), "[output]\npause = false\n").unwrap();
        assert!(!Config::discover(temp.path()).unwrap().output.pause);
    }
}
