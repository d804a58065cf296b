//! Formatting defaults read from TOML.
//!
//! ```toml
//! locale = "de"
//! width = 15
//! precision = 8
//! uppercase = false
//! left_justify = true
//! ```
//!
//! Every key is optional. A missing `locale` means `"en"`; missing `width` and `precision` leave the output
//! unconstrained.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{MeasureError, MeasureResult};
use crate::format::{FormatFlags, FormatSpec};
use crate::locale::{self, Locale};
use crate::measure::Measure;

/// Formatting configuration from file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    /// Locale name, resolved with [`locale::resolve`].
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Minimum output length.
    #[serde(default)]
    pub width: Option<usize>,
    /// Maximum output length.
    #[serde(default)]
    pub precision: Option<usize>,
    /// Upper-case unit symbols.
    #[serde(default)]
    pub uppercase: bool,
    /// Pad on the right.
    #[serde(default)]
    pub left_justify: bool,
}

fn default_locale() -> String {
    "en".to_owned()
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            width: None,
            precision: None,
            uppercase: false,
            left_justify: false,
        }
    }
}

impl FormatConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> MeasureResult<Self> {
        toml::from_str(content).map_err(|e| {
            MeasureError::Configuration(format!("Failed to parse config: {}", e))
        })
    }

    /// Load a configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(FormatConfig)` if successful
    /// * `Err(MeasureError::Configuration)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> MeasureResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MeasureError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded format configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Resolve the configured locale.
    pub fn locale(&self) -> MeasureResult<Locale> {
        locale::resolve(&self.locale)
    }

    /// The format request described by this configuration.
    pub fn spec(&self) -> FormatSpec {
        let mut flags = FormatFlags::empty();
        flags.set(FormatFlags::UPPERCASE, self.uppercase);
        flags.set(FormatFlags::LEFT_JUSTIFY, self.left_justify);
        FormatSpec {
            flags,
            width: self.width,
            precision: self.precision,
        }
    }

    /// Render `measure` with the configured locale and constraints.
    pub fn format<M: Measure>(&self, measure: &M) -> MeasureResult<String> {
        let locale = self.locale()?;
        Ok(measure.format_with(&locale, &self.spec()))
    }
}
