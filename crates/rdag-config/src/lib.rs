//! Configuration for the rdag generator.
//!
//! Settings come from `.rdag/config.toml`: the nearest one found walking up
//! from the working directory, else the one in the home directory, else the
//! built-in defaults. An explicit path always wins.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs::home_dir;
use rdag_core::{log_debug, log_info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

const CONFIG_DIR: &str = ".rdag";
const CONFIG_FILE: &str = "config.toml";

/// Generator configuration loaded from TOML files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Names stamped into the emitted sources.
    pub emit: EmitConfig,

    /// Catalog selection.
    pub catalog: CatalogConfig,

    /// File the configuration was read from, if any.
    #[serde(skip)]
    source: Option<PathBuf>,
}

/// Emission settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitConfig {
    /// C++ namespace wrapping every native artifact.
    pub namespace: String,

    /// Java package of the enumeration class.
    pub java_package: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            namespace: "librdag".to_string(),
            java_package: "com.opengamma.rdag.enums".to_string(),
        }
    }
}

/// Catalog override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog file to use instead of the built-in reference catalogs.
    /// Relative paths are taken from the directory holding the config file.
    pub path: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Loads configuration from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.source = Some(path.to_path_buf());
        log_info!("config", "Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str::<GeneratorConfig>(contents)?)
    }

    /// Returns the default configuration path (`$HOME/.rdag/config.toml`).
    pub fn default_path() -> Result<PathBuf> {
        let home = home_dir().ok_or(ConfigError::HomeDirMissing)?;
        Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Resolve configuration for one run.
    ///
    /// `explicit` must exist if given. Otherwise the nearest project file and
    /// then the home file are tried; finding neither yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let cwd = env::current_dir().map_err(ConfigError::CurrentDir)?;
        if let Some(path) = project_config_path(&cwd) {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Ok(path) if path.is_file() => Self::from_file(path),
            Ok(_) | Err(ConfigError::HomeDirMissing) => {
                log_debug!("config", "No configuration file found; using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// File the configuration came from, if it was read from disk.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Catalog override, resolved against the config file's directory.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let path = self.catalog.path.as_ref()?;
        match self.source.as_deref().and_then(Path::parent) {
            Some(base) if path.is_relative() => Some(base.join(path)),
            _ => Some(path.clone()),
        }
    }
}

/// Nearest `.rdag/config.toml` in `start` or one of its ancestors.
pub fn project_config_path(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
        .find(|candidate| candidate.is_file())
}

/// Errors that can occur while loading generator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO failure when reading config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unable to read the working directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("Unable to determine home directory for default config path")]
    HomeDirMissing,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn deserialize_full_config() {
        let toml = r#"
            [emit]
            namespace = "rdag_next"
            java_package = "org.example.enums"

            [catalog]
            path = "ops.toml"
        "#;

        let config = GeneratorConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.emit.namespace, "rdag_next");
        assert_eq!(config.emit.java_package, "org.example.enums");
        assert_eq!(config.catalog.path.as_deref(), Some(Path::new("ops.toml")));
    }

    #[test]
    fn missing_sections_take_defaults() {
        let config = GeneratorConfig::from_toml_str("[emit]\nnamespace = \"x\"\n").unwrap();
        assert_eq!(config.emit.namespace, "x");
        assert_eq!(config.emit.java_package, "com.opengamma.rdag.enums");
        assert!(config.catalog.path.is_none());
        assert_eq!(GeneratorConfig::from_toml_str("").unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let res = GeneratorConfig::from_toml_str("[emit\nnamespace = 1");
        assert!(matches!(res, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn default_path_respects_home() {
        let home = env::var("HOME").expect("HOME must be set for this test");
        let expected = PathBuf::from(home).join(".rdag").join("config.toml");
        assert_eq!(GeneratorConfig::default_path().unwrap(), expected);
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let res = GeneratorConfig::load(Some(missing.as_path()));
        let err = res.unwrap_err();
        assert!(matches!(&err, ConfigError::Io { path, .. } if path == &missing));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn malformed_file_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("broken.toml");
        fs::write(&file, "[emit\nnamespace = 1").unwrap();
        let err = GeneratorConfig::from_file(&file).unwrap_err();
        assert!(matches!(&err, ConfigError::Parse { path, .. } if path == &file));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn project_file_is_found_from_nested_directory() {
        let root = tempfile::tempdir().unwrap();
        let config_dir = root.path().join(".rdag");
        fs::create_dir(&config_dir).unwrap();
        fs::write(config_dir.join("config.toml"), "[emit]\nnamespace = \"proj\"\n").unwrap();
        let nested = root.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = project_config_path(&nested).unwrap();
        assert_eq!(found, config_dir.join("config.toml"));
        assert_eq!(GeneratorConfig::from_file(found).unwrap().emit.namespace, "proj");
    }

    #[test]
    fn relative_catalog_path_follows_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.toml");
        fs::write(&file, "[catalog]\npath = \"ops.toml\"\n").unwrap();

        let config = GeneratorConfig::from_file(&file).unwrap();
        assert_eq!(config.source(), Some(file.as_path()));
        assert_eq!(config.catalog_path(), Some(dir.path().join("ops.toml")));
    }

    #[test]
    fn absolute_catalog_path_is_kept() {
        let config = GeneratorConfig {
            catalog: CatalogConfig {
                path: Some(PathBuf::from("/srv/catalog.toml")),
            },
            ..GeneratorConfig::default()
        };
        assert_eq!(config.catalog_path(), Some(PathBuf::from("/srv/catalog.toml")));
    }
}
