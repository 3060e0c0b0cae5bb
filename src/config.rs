use crate::calculator::Mode;
use crate::error::ConfigError;
use crate::format::DEFAULT_PRECISION;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Largest accepted number of decimal places
pub const MAX_PRECISION: usize = 15;

/// Settings of a calculator session.
///
/// Missing keys take their default value:
///
/// ```
/// # use calcpad::{Config, Mode};
/// let config = Config::from_toml("mode = \"scientific\"").unwrap();
/// assert_eq!(config.mode, Mode::Scientific);
/// assert_eq!(config.precision, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Keypad layout at startup
    pub mode: Mode,
    /// Decimal places kept in non-integral results
    pub precision: usize,
    /// Number of characters of the display
    pub display_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Standard,
            precision: DEFAULT_PRECISION,
            display_width: 16,
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Check that all values are in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "precision {} is above {}",
                self.precision, MAX_PRECISION
            )));
        }
        if self.display_width == 0 {
            return Err(ConfigError::Invalid("display width must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn full() {
        let config = Config::from_toml(
            r#"
            mode = "scientific"
            precision = 4
            display_width = 24
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            Config {
                mode: Mode::Scientific,
                precision: 4,
                display_width: 24,
            }
        );
    }

    #[test]
    fn invalid() {
        assert!(matches!(
            Config::from_toml("precision = 40"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml("display_width = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml("mode = \"graphing\""),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            Config::from_toml("colour = \"red\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            Config::load(Path::new("/nonexistent/calcpad.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
