//! Diagnostic logging
//!
//! `tracing` events go to stderr, either human-readable or as JSON lines.
//! stdout stays reserved for status lines and the NDJSON event stream.
//!
//! `RUST_LOG` wins over the verbosity flag when set.

use std::fmt;

use is_terminal::IsTerminal;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt as tracing_fmt, EnvFilter};

/// Log output format
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable console format
    #[default]
    Human,
    /// Machine-parseable JSON lines
    Jsonl,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Human => write!(f, "human"),
            LogFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    pub level: LevelFilter,
}

impl LogConfig {
    pub fn new(format: LogFormat, verbosity: u8) -> Self {
        Self {
            format,
            level: level_for_verbosity(verbosity),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(LogFormat::Human, 0)
    }
}

/// `-v` count to default level: none = warn, 1 = info, 2 = debug, 3+ = trace
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("scanprep={}", config.level)));

    let result = match config.format {
        LogFormat::Human => {
            let use_ansi = std::io::stderr().is_terminal();
            let layer = tracing_fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(use_ansi)
                .without_time();
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Jsonl => {
            let layer = tracing_fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
    };

    if result.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
