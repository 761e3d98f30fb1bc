//! Configuration management for docmill.
//!
//! Parses `docmill.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [resources]
//! custom_assets = ["assets/logo.svg"]
//! custom_styles = ["${THEME_DIR:-theme}/brand.css"]
//!
//! [[source_sets]]
//! id = "common"
//!
//! [[source_sets]]
//! id = "jvm"
//! depends_on = ["common"]
//!
//! [output]
//! manifest = "build/manifest.json"
//! ```
//!
//! ## Path Resolution
//!
//! Custom resource paths support `${VAR}`, `${VAR:-default}` and a leading
//! `~`, and are resolved relative to the directory holding the config file.

mod expand;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// Custom resources given on the command line are appended to the configured
/// ones; the manifest path replaces the configured one.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Additional custom asset files.
    pub custom_assets: Vec<PathBuf>,
    /// Additional custom stylesheet files.
    pub custom_styles: Vec<PathBuf>,
    /// Override manifest output path.
    pub manifest: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docmill.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Custom resources (paths are raw strings from TOML).
    resources: ResourcesConfigRaw,
    /// Source-sets and their dependencies, in declaration order.
    pub source_sets: Vec<SourceSetConfig>,
    /// Output configuration (paths are raw strings from TOML).
    output: OutputConfigRaw,

    /// Resolved custom resources (set after loading).
    #[serde(skip)]
    pub resources_resolved: ResourcesConfig,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw resources configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResourcesConfigRaw {
    custom_assets: Vec<String>,
    custom_styles: Vec<String>,
}

/// User-provided resource overriding or extending the bundled ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomResource {
    /// File name, used as the output name below `images/` or `styles/`.
    pub name: String,
    /// Source file path.
    pub path: PathBuf,
}

impl CustomResource {
    /// Create a custom resource named after the file name of `path`.
    ///
    /// Relative paths are made absolute against the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `path` has no file name, or
    /// `ConfigError::Io` if the current directory cannot be read.
    pub fn from_path(path: impl Into<PathBuf>, field: &str) -> Result<Self, ConfigError> {
        let path = std::path::absolute(path.into())?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ConfigError::Validation(format!(
                    "{field}: '{}' does not name a file",
                    path.display()
                ))
            })?;
        Ok(Self { name, path })
    }
}

/// Resolved custom resources with absolute paths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourcesConfig {
    /// Custom images, emitted as `images/<name>`.
    pub custom_assets: Vec<CustomResource>,
    /// Custom stylesheets, emitted as `styles/<name>`.
    pub custom_styles: Vec<CustomResource>,
}

/// Source-set declaration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SourceSetConfig {
    /// Source-set identifier.
    pub id: String,
    /// Identifiers of the source-sets this one depends on.
    #[serde(default)]
    pub depends_on: Vec<String>,
}

/// Raw output configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutputConfigRaw {
    manifest: Option<String>,
}

/// Resolved output configuration.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Where to write the resource manifest. `None` writes to stdout.
    pub manifest: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`resources.custom_styles`").
        field: String,
        /// Error message (e.g., "${`THEME_DIR`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docmill.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings)?;
            config.validate()?;
        }

        Ok(config)
    }

    /// Source-set dependency pairs in declaration order.
    #[must_use]
    pub fn source_set_dependencies(&self) -> Vec<(&str, &[String])> {
        self.source_sets
            .iter()
            .map(|s| (s.id.as_str(), s.depends_on.as_slice()))
            .collect()
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) -> Result<(), ConfigError> {
        for path in &settings.custom_assets {
            self.resources_resolved
                .custom_assets
                .push(CustomResource::from_path(path, "--custom-asset")?);
        }
        for path in &settings.custom_styles {
            self.resources_resolved
                .custom_styles
                .push(CustomResource::from_path(path, "--custom-style")?);
        }
        if let Some(manifest) = &settings.manifest {
            self.output_resolved.manifest = Some(manifest.clone());
        }
        Ok(())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_source_sets()?;
        self.validate_custom_resources()
    }

    /// Custom resources of one kind must have distinct file names, since the
    /// name is the output path.
    fn validate_custom_resources(&self) -> Result<(), ConfigError> {
        let kinds = [
            ("custom_assets", &self.resources_resolved.custom_assets),
            ("custom_styles", &self.resources_resolved.custom_styles),
        ];
        for (field, resources) in kinds {
            let mut seen = HashSet::new();
            if let Some(duplicate) = resources.iter().find(|r| !seen.insert(r.name.as_str())) {
                return Err(ConfigError::Validation(format!(
                    "resources.{field}: more than one file named '{}'",
                    duplicate.name
                )));
            }
        }
        Ok(())
    }

    /// Source-set ids must be non-empty and unique, and dependencies must
    /// reference declared ids.
    fn validate_source_sets(&self) -> Result<(), ConfigError> {
        let mut declared = HashSet::new();
        for source_set in &self.source_sets {
            if source_set.id.is_empty() {
                return Err(ConfigError::Validation(
                    "source_sets.id cannot be empty".to_owned(),
                ));
            }
            if !declared.insert(source_set.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "source set '{}' is declared more than once",
                    source_set.id
                )));
            }
        }

        for source_set in &self.source_sets {
            if let Some(unknown) = source_set
                .depends_on
                .iter()
                .find(|dep| !declared.contains(dep.as_str()))
            {
                return Err(ConfigError::Validation(format!(
                    "source set '{}' depends on undeclared source set '{unknown}'",
                    source_set.id
                )));
            }
        }

        Ok(())
    }

    /// Expand and resolve raw paths relative to the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let resolve = |raw: &[String], field: &str| -> Result<Vec<CustomResource>, ConfigError> {
            raw.iter()
                .map(|value| {
                    let expanded = expand::expand_path(value, field)?;
                    CustomResource::from_path(config_dir.join(expanded), field)
                })
                .collect()
        };

        self.resources_resolved = ResourcesConfig {
            custom_assets: resolve(&self.resources.custom_assets, "resources.custom_assets")?,
            custom_styles: resolve(&self.resources.custom_styles, "resources.custom_styles")?,
        };

        self.output_resolved = OutputConfig {
            manifest: self
                .output
                .manifest
                .as_deref()
                .map(|m| expand::expand_path(m, "output.manifest"))
                .transpose()?
                .map(|m| config_dir.join(m)),
        };

        Ok(())
    }
}
