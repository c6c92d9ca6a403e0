//! Shared configuration loader for the pagekit toolchain.
//!
//! `defaults/pagekit.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`PagekitConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use pagekit_babel::import::ImportOptions;
use pagekit_babel::{ConvertOptions, Environment, RehydrateOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/pagekit.default.toml");

/// Top-level configuration consumed by pagekit applications.
#[derive(Debug, Clone, Deserialize)]
pub struct PagekitConfig {
    pub convert: ConvertConfig,
    pub rehydrate: RehydrateConfig,
    pub import: ImportConfig,
}

/// Parser choice and output shape for conversions.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub parser: String,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RehydrateConfig {
    pub heading_max_chars: usize,
}

/// Page regions stripped from imported HTML.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    pub remove_header: bool,
    pub remove_footer: bool,
    pub remove_navigation: bool,
    pub remove_sidebar: bool,
}

impl ConvertConfig {
    pub fn environment(&self) -> Result<Environment, ConfigError> {
        self.parser
            .parse()
            .map_err(|err: String| ConfigError::Message(format!("convert.parser: {err}")))
    }
}

impl From<&RehydrateConfig> for RehydrateOptions {
    fn from(config: &RehydrateConfig) -> Self {
        RehydrateOptions {
            heading_max_chars: config.heading_max_chars,
        }
    }
}

impl From<&ImportConfig> for ImportOptions {
    fn from(config: &ImportConfig) -> Self {
        ImportOptions {
            remove_header: config.remove_header,
            remove_footer: config.remove_footer,
            remove_navigation: config.remove_navigation,
            remove_sidebar: config.remove_sidebar,
        }
    }
}

impl TryFrom<&PagekitConfig> for ConvertOptions {
    type Error = ConfigError;

    fn try_from(config: &PagekitConfig) -> Result<Self, Self::Error> {
        Ok(ConvertOptions {
            environment: config.convert.environment()?,
            pretty_json: config.convert.pretty_json,
            rehydrate: (&config.rehydrate).into(),
        })
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (CLI flags such as `--keep-footer`).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    ///
    /// An unknown `convert.parser` is rejected here rather than at first use.
    pub fn build(self) -> Result<PagekitConfig, ConfigError> {
        let config: PagekitConfig = self.builder.build()?.try_deserialize()?;
        config.convert.environment()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PagekitConfig, ConfigError> {
    Loader::new().build()
}
