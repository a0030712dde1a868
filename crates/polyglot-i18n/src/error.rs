//! Error types for internationalization operations

use polyglot_common::PolyglotError;
use thiserror::Error;

/// Errors that can occur during internationalization operations
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// A catalog key was empty or otherwise unusable
    #[error("Invalid catalog key: {0:?}")]
    InvalidKey(String),

    /// Failed to load a catalog file
    #[error("Failed to load catalog {path}: {reason}")]
    CatalogLoad { path: String, reason: String },

    /// Failed to substitute arguments into a template
    #[error("Failed to format template '{template}': {reason}")]
    Format {
        template: String,
        reason: FormatErrorReason,
    },

    /// Invalid configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Why a template could not be formatted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatErrorReason {
    /// Placeholder index has no matching argument
    #[error("placeholder {{{index}}} needs at least {needed} arguments, got {provided}", needed = .index + 1)]
    MissingArgument { index: usize, provided: usize },

    /// A `{` or `}` is not part of a placeholder or an escape
    #[error("unbalanced brace at byte {position}")]
    UnbalancedBrace { position: usize },

    /// Placeholder body could not be parsed
    #[error("malformed placeholder at byte {position}")]
    MalformedPlaceholder { position: usize },

    /// Alignment wider than [`crate::formatter::MAX_ALIGNMENT`]
    #[error("alignment at byte {position} exceeds {max} columns", max = crate::formatter::MAX_ALIGNMENT)]
    AlignmentOutOfRange { position: usize },

    /// Format strings other than `G` and `D[n]` are not supported
    #[error("unsupported format specifier {spec:?}")]
    UnsupportedSpecifier { spec: String },

    /// `D[n]` applied to an argument that does not display as an integer
    #[error("format specifier {spec:?} needs an integer argument at index {index}")]
    SpecifierMismatch { index: usize, spec: String },
}

impl I18nError {
    pub(crate) fn format(template: &str, reason: FormatErrorReason) -> Self {
        Self::Format {
            template: template.to_string(),
            reason,
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub(crate) fn catalog_load(path: impl AsRef<std::path::Path>, reason: impl Into<String>) -> Self {
        Self::CatalogLoad {
            path: path.as_ref().display().to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for PolyglotError {
    fn from(err: I18nError) -> Self {
        match err {
            I18nError::Config { message } => PolyglotError::config(message),
            I18nError::Io(io) => PolyglotError::Io(io),
            I18nError::InvalidLanguageId(tag) => {
                let source = I18nError::InvalidLanguageId(tag.clone());
                PolyglotError::localization("Invalid locale", source).with_locale(tag)
            }
            other => PolyglotError::localization("Localization failed", other),
        }
    }
}
