//! Environment-driven settings for the demo binary.

use crate::ExampleError;
use graphplan_tracing::{TracingConfig, TracingFormat};

/// Env var holding a `tracing` filter, e.g. `graphplan_graph=debug`.
pub const LOG_ENV: &str = "GRAPHPLAN_LOG";

/// Env var selecting the log format: `pretty`, `compact` or `json`.
pub const LOG_FORMAT_ENV: &str = "GRAPHPLAN_LOG_FORMAT";

/// Builds a tracing configuration from optional filter and format strings.
///
/// # Errors
///
/// Returns [`ExampleError::LogFormat`] if `format` is not a known format.
pub fn tracing_config(
    filter: Option<&str>,
    format: Option<&str>,
) -> Result<TracingConfig, ExampleError> {
    let mut config = TracingConfig::new();
    if let Some(filter) = filter.filter(|f| !f.trim().is_empty()) {
        config = config.with_env_filter(filter);
    }
    if let Some(format) = format {
        config = config.with_format(format.parse::<TracingFormat>()?);
    }
    Ok(config)
}

/// Reads [`LOG_ENV`] and [`LOG_FORMAT_ENV`] from the process environment.
///
/// Call [`dotenvy::dotenv`] first to pick up a `.env` file.
///
/// # Errors
///
/// Returns [`ExampleError::LogFormat`] if the format variable is invalid.
pub fn tracing_config_from_env() -> Result<TracingConfig, ExampleError> {
    let filter = std::env::var(LOG_ENV).ok();
    let format = std::env::var(LOG_FORMAT_ENV).ok();
    tracing_config(filter.as_deref(), format.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_variables() {
        let config = tracing_config(None, None).unwrap();
        assert_eq!(config, TracingConfig::default());
    }

    #[test]
    fn filter_and_format_are_applied() {
        let config = tracing_config(Some("graphplan_graph=debug"), Some("json")).unwrap();
        assert_eq!(config.env_filter.as_deref(), Some("graphplan_graph=debug"));
        assert_eq!(config.format, TracingFormat::Json);
    }

    #[test]
    fn blank_filter_is_ignored() {
        let config = tracing_config(Some("  "), None).unwrap();
        assert_eq!(config.env_filter, None);
    }

    #[test]
    fn unknown_format_is_an_error() {
        assert!(matches!(
            tracing_config(None, Some("yaml")),
            Err(ExampleError::LogFormat(_))
        ));
    }
}
