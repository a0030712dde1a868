//! Structured logging infrastructure for Polyglot

use crate::error::{PolyglotError, Result};
use std::fs::{File, OpenOptions};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "polyglot_i18n=trace")
    pub level: String,
    /// Whether to emit newline-delimited JSON records
    pub json_format: bool,
    /// Whether to use the compact single-line format
    pub compact_format: bool,
    /// Whether to enable pretty formatting with colors
    pub pretty_format: bool,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to include spans in the output
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            compact_format: false,
            pretty_format: true,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    /// Development preset: pretty output at debug level
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            include_spans: true,
            ..Self::default()
        }
    }

    /// Production preset: JSON records at info level written to a file
    pub fn production(log_file: impl Into<String>) -> Self {
        Self {
            json_format: true,
            pretty_format: false,
            file_path: Some(log_file.into()),
            ..Self::default()
        }
    }

    fn open_log_file(&self) -> Result<Option<File>> {
        match &self.file_path {
            Some(path) => Ok(Some(
                OpenOptions::new().create(true).append(true).open(path)?,
            )),
            None => Ok(None),
        }
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Fails if the filter cannot be parsed, the log file cannot be opened, or a
/// global subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| PolyglotError::logging(format!("invalid log filter: {e}")))?;

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    let file = config.open_log_file()?;

    let installed = if config.json_format {
        let layer = fmt::layer()
            .json()
            .with_span_events(span_events)
            .with_current_span(config.include_spans)
            .with_target(config.include_targets);

        match file {
            Some(file) => registry.with(layer.with_writer(file)).try_init(),
            None => registry.with(layer).try_init(),
        }
    } else if config.compact_format {
        let layer = fmt::layer()
            .with_span_events(span_events)
            .with_target(config.include_targets)
            .compact();

        match file {
            Some(file) => registry
                .with(layer.with_ansi(false).with_writer(file))
                .try_init(),
            None => registry.with(layer).try_init(),
        }
    } else if config.pretty_format {
        let layer = fmt::layer()
            .pretty()
            .with_span_events(span_events)
            .with_target(config.include_targets);

        match file {
            Some(file) => registry
                .with(layer.with_ansi(false).with_writer(file))
                .try_init(),
            None => registry.with(layer).try_init(),
        }
    } else {
        let layer = fmt::layer()
            .with_span_events(span_events)
            .with_target(config.include_targets);

        match file {
            Some(file) => registry
                .with(layer.with_ansi(false).with_writer(file))
                .try_init(),
            None => registry.with(layer).try_init(),
        }
    };

    installed.map_err(|e| PolyglotError::logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json_format);
        assert!(!config.compact_format);
        assert!(config.pretty_format);
        assert!(config.file_path.is_none());
        assert!(config.include_targets);
    }

    #[test]
    fn test_presets() {
        let dev = LoggingConfig::development();
        assert_eq!(dev.level, "debug");
        assert!(dev.include_spans);

        let prod = LoggingConfig::production("polyglot.log");
        assert!(prod.json_format);
        assert!(!prod.pretty_format);
        assert_eq!(prod.file_path.as_deref(), Some("polyglot.log"));
    }

    #[test]
    fn test_json_records_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("polyglot.log");
        let config = LoggingConfig::production(path.to_string_lossy());

        match init_logging(config) {
            Ok(()) => {
                tracing::info!(locale = "fr-CA", "catalog loaded");
                let written = std::fs::read_to_string(&path).unwrap();
                let record = written
                    .lines()
                    .find(|line| line.contains("catalog loaded"))
                    .unwrap();
                assert!(record.starts_with('{'));
                assert!(record.contains("\"catalog loaded\""));
                assert!(record.contains("\"locale\":\"fr-CA\""));
            }
            // Another test in this binary installed the global subscriber first.
            Err(err) => assert!(matches!(err, PolyglotError::Logging { .. })),
        }
    }

    #[test]
    fn test_unwritable_log_file_is_reported() {
        let config = LoggingConfig {
            file_path: Some("/nonexistent-dir/polyglot/out.log".to_string()),
            ..LoggingConfig::default()
        };
        assert!(matches!(init_logging(config), Err(PolyglotError::Io(_))));
    }
}
