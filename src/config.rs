//! Configuration loader for the edtf tools.
//!
//! `defaults/edtf.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Callers layer user files and per-key
//! overrides on top of those defaults via [`Loader`] before deserializing
//! into [`EdtfConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::parser::{Level, ParseOptions};

const DEFAULT_TOML: &str = include_str!("../defaults/edtf.default.toml");

/// Top-level configuration consumed by the edtf tools.
#[derive(Debug, Clone, Deserialize)]
pub struct EdtfConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub level: Level,
    pub trace: bool,
}

impl ParserConfig {
    pub fn options(&self) -> ParseOptions {
        ParseOptions {
            level: self.level,
            trace: self.trace,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of an output format, see [`crate::formats::OutputFormat`]
    pub format: String,
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

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<EdtfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<EdtfConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parser.level, Level::Full);
        assert!(!config.parser.trace);
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parser.level", "level0")
            .expect("override to apply")
            .set_override("parser.trace", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.parser.level, Level::Level0);
        assert_eq!(
            config.parser.options(),
            ParseOptions {
                level: Level::Level0,
                trace: true
            }
        );
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[output]\nformat = \"yaml\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "yaml");
        assert_eq!(config.parser.level, Level::Full);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new()
            .with_file("/nonexistent/edtf.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/edtf.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn rejects_unknown_level() {
        let result = Loader::new()
            .set_override("parser.level", "level2")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }
}
