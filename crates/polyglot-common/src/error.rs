//! Error types and utilities for Polyglot

use thiserror::Error;

/// Result type alias for Polyglot operations
pub type Result<T> = std::result::Result<T, PolyglotError>;

/// Application-level error type for Polyglot operations
#[derive(Error, Debug)]
pub enum PolyglotError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Localization errors (catalog loading, formatting)
    #[error("Localization error: {message}")]
    Localization {
        /// Human readable description
        message: String,
        /// Locale involved, when known
        locale: Option<String>,
        /// Underlying cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Logging setup errors
    #[error("Logging error: {message}")]
    Logging {
        /// Human readable description
        message: String,
    },
}

impl PolyglotError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a new localization error caused by `source`
    pub fn localization(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Localization {
            message: msg.into(),
            locale: None,
            source: Box::new(source),
        }
    }

    /// Tag a localization error with the locale involved. Other errors are
    /// returned unchanged.
    #[must_use]
    pub fn with_locale(mut self, tag: impl Into<String>) -> Self {
        if let Self::Localization { locale, .. } = &mut self {
            *locale = Some(tag.into());
        }
        self
    }

    /// Locale a localization error concerns, when known
    pub fn locale(&self) -> Option<&str> {
        match self {
            Self::Localization { locale, .. } => locale.as_deref(),
            _ => None,
        }
    }

    /// Create a new logging setup error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let config_error = PolyglotError::config("config issue");
        assert_eq!(config_error.to_string(), "Configuration error: config issue");
        assert!(config_error.source().is_none());

        let logging_error = PolyglotError::logging("subscriber already set");
        assert_eq!(logging_error.to_string(), "Logging error: subscriber already set");
    }

    #[test]
    fn test_localization_error() {
        let error = PolyglotError::localization(
            "Formatting failed",
            io::Error::new(io::ErrorKind::InvalidData, "bad template"),
        );
        assert_eq!(error.to_string(), "Localization error: Formatting failed");
        assert!(error.source().is_some());
        assert_eq!(error.locale(), None);

        let tagged = error.with_locale("fr-CA");
        assert_eq!(tagged.locale(), Some("fr-CA"));
    }

    #[test]
    fn test_with_locale_ignores_other_errors() {
        let error = PolyglotError::config("bad").with_locale("fr");
        assert_eq!(error.locale(), None);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: PolyglotError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
    }
}
