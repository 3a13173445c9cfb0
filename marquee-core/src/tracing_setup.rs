//! Tracing setup for Marquee.
//!
//! Console output at a user-chosen level, with an optional full-debug
//! log file so a failed run can always be inspected after the fact.

use std::fs::{File, create_dir_all};
use std::path::Path;

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Initializes tracing with a console layer and, when `logs_dir` is
/// given, a file layer capturing everything at TRACE level.
///
/// The file layer overwrites `marquee-last-run.log` on each run; only
/// the most recent run is kept.
///
/// # Errors
///
/// Returns an error when the logs directory cannot be created or the
/// log file cannot be opened for writing.
pub fn init_tracing(
    console_level: Level,
    logs_dir: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level.to_string()));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_filter(console_filter);

    let registry = tracing_subscriber::registry().with(console_layer);

    match logs_dir {
        Some(dir) => {
            create_dir_all(dir)?;
            let log_path = dir.join("marquee-last-run.log");
            let log_file = File::create(&log_path)?;

            let file_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(log_file)
                .with_filter(EnvFilter::new("trace"));

            registry.with(file_layer).init();
            tracing::info!(
                "tracing initialized: console={console_level}, debug_file={}",
                log_path.display()
            );
        }
        None => {
            registry.init();
            tracing::info!("tracing initialized: console={console_level}");
        }
    }

    Ok(())
}

/// CLI log levels for user control.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliLogLevel {
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Informational, warning, and error messages
    Info,
    /// Debug, informational, warning, and error messages
    Debug,
    /// All messages including detailed tracing
    Trace,
}

impl CliLogLevel {
    /// Converts the CLI log level to the tracing `Level` it selects.
    pub fn as_tracing_level(self) -> Level {
        match self {
            CliLogLevel::Error => Level::ERROR,
            CliLogLevel::Warn => Level::WARN,
            CliLogLevel::Info => Level::INFO,
            CliLogLevel::Debug => Level::DEBUG,
            CliLogLevel::Trace => Level::TRACE,
        }
    }
}

impl std::fmt::Display for CliLogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CliLogLevel::Error => "error",
            CliLogLevel::Warn => "warn",
            CliLogLevel::Info => "info",
            CliLogLevel::Debug => "debug",
            CliLogLevel::Trace => "trace",
        };
        write!(f, "{name}")
    }
}
