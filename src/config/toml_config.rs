use crate::core::ConfigProvider;
use crate::domain::model::Language;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_PRECISION: usize = 10;

/// Optional settings file, e.g.
///
/// ```toml
/// [display]
/// precision = 3
/// language = "ru"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    pub precision: Option<usize>,
    pub language: Option<Language>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn precision(&self) -> Option<usize> {
        self.display.precision
    }

    fn language(&self) -> Option<Language> {
        self.display.language
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(precision) = self.display.precision {
            validate_range("display.precision", precision, 0, MAX_PRECISION)?;
        }
        Ok(())
    }
}
