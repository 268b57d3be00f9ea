//! Logging setup for binaries. Library code only emits `tracing` events.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use tracing_subscriber::{
    EnvFilter, Registry, fmt as fmt_layer, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}', expected 'text' or 'json'", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => f.write_str("text"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Installs the global subscriber, writing to stderr. `RUST_LOG` takes
/// precedence over `level`.
pub fn init_logging(level: &str, format: LogFormat) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    match format {
        LogFormat::Json => Registry::default()
            .with(filter)
            .with(fmt_layer::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Text => Registry::default()
            .with(filter)
            .with(fmt_layer::layer().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}
