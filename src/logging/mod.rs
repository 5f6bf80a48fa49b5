// Logging module for structured logging using the tracing crate

use std::error::Error;
use std::str::FromStr;

use tracing_subscriber::EnvFilter;

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Plain,
    /// One JSON object per event, for log aggregation systems
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(LogFormat::Plain),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("unknown log format: {}", s)),
        }
    }
}

/// Build the event filter: `RUST_LOG` wins over `default_level`
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize the tracing subscriber for structured logging
///
/// Logs go to stderr so the URL printed on stdout stays machine-readable.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// # Examples
///
/// ```
/// use thumbor_url::logging::{init_subscriber, LogFormat};
///
/// init_subscriber(LogFormat::Plain, "warn").expect("Failed to initialize logging");
/// tracing::info!("Application started");
/// ```
pub fn init_subscriber(
    format: LogFormat,
    default_level: &str,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Plain => builder.try_init()?,
        LogFormat::Json => builder.json().try_init()?,
    }

    Ok(())
}
