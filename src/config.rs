//! Configuration for the demonstration samples
//!
//! `defaults/textscan.default.toml` is embedded into the binary so the
//! demonstration runs without any external files. Callers layer user files on
//! top of those defaults via [Loader] before deserializing into
//! [TextscanConfig].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/textscan.default.toml");

/// Top-level configuration consumed by the textscan binary.
#[derive(Debug, Clone, Deserialize)]
pub struct TextscanConfig {
    pub samples: SamplesConfig,
}

/// Sample strings fed to the demonstration.
#[derive(Debug, Clone, Deserialize)]
pub struct SamplesConfig {
    /// Inputs scanned for triple runs, in order.
    pub runs: Vec<String>,
    /// Phrase normalized and peeled for palindromic structure.
    pub palindrome: String,
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TextscanConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TextscanConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.samples.runs.len(), 2);
        assert!(config.samples.runs[0].contains("aaabbbaaa"));
        assert_eq!(config.samples.palindrome, "A man, a plan, a canal – Panama");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("samples.palindrome", "otto")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.samples.palindrome, "otto");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("no-such-textscan.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.samples.runs.len(), 2);
    }
}
