pub mod toml_config;

use crate::core::shell::ShellSettings;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use toml_config::MAX_PRECISION;

#[cfg(feature = "cli")]
use crate::domain::model::Language;
#[cfg(feature = "cli")]
use crate::utils::validation::validate_path;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "console-calc")]
#[command(about = "An interactive four-operator console calculator")]
pub struct CliConfig {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Digits after the decimal point in results
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Language of prompts and messages
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the settings file named by `--config`, if any.
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        let Some(path) = &self.config else {
            return Ok(None);
        };
        validate_path("config", path)?;
        tracing::debug!("Loading settings from {}", path);
        let file = TomlConfig::from_file(path)?;
        file.validate()?;
        Ok(Some(file))
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn precision(&self) -> Option<usize> {
        self.precision
    }

    fn language(&self) -> Option<Language> {
        self.language
    }
}

impl Validate for ShellSettings {
    fn validate(&self) -> Result<()> {
        validate_range("precision", self.precision, 0, MAX_PRECISION)
    }
}

/// Merges configuration layers over the built-in defaults. Later layers win.
pub fn resolve_settings(layers: &[&dyn ConfigProvider]) -> Result<ShellSettings> {
    let mut settings = ShellSettings::default();
    for layer in layers {
        if let Some(precision) = layer.precision() {
            settings.precision = precision;
        }
        if let Some(language) = layer.language() {
            settings.language = language;
        }
    }
    settings.validate()?;
    Ok(settings)
}
