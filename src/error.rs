use thiserror::Error;

/// Error type for expression evaluation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Error while lexing or parsing an expression
    #[error("ParseError: {0}")]
    ParseError(String),
    /// Function called outside of its real domain
    #[error("DomainError: {0}")]
    DomainError(String),
    /// The result is infinite or NaN, e.g. after a division by zero
    #[error("NotFinite: result is not a finite number")]
    NotFinite,
}

/// Error type for loading a [`Config`](struct.Config.html)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid TOML for `Config`
    #[error("invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
    /// A value is out of its accepted range
    #[error("invalid configuration value: {0}")]
    Invalid(String),
}
