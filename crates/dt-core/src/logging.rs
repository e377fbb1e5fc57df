//! Structured logging bootstrap for dt-core.
//!
//! Dual-mode logging:
//! - Human-readable console output for interactive use
//! - Machine-parseable JSONL for automated workflows
//!
//! stdout is reserved for command payloads (JSON/MD output); all log
//! output goes to stderr. The format is selected via `DT_LOG_FORMAT`
//! and fine-grained filters via `DT_LOG` or `RUST_LOG`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable console format.
    #[default]
    Human,

    /// Machine-parseable JSON lines.
    Jsonl,
}

/// Logging configuration assembled from environment and CLI flags.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub format: LogFormat,
    pub level: &'static str,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            format: LogFormat::Human,
            level: "info",
        }
    }
}

impl LogConfig {
    /// Build from `DT_LOG_FORMAT` and the CLI verbosity flags.
    pub fn from_env(verbose: u8, quiet: bool) -> Self {
        let format = match std::env::var("DT_LOG_FORMAT").ok().as_deref() {
            Some("jsonl") => LogFormat::Jsonl,
            _ => LogFormat::Human,
        };

        let level = if quiet {
            "warn"
        } else {
            match verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        };

        LogConfig { format, level }
    }
}

/// Initialize the logging subsystem.
///
/// Must be called once at startup before any logging occurs.
/// Respects environment variables DT_LOG, RUST_LOG, and DT_LOG_FORMAT.
pub fn init_logging(config: &LogConfig) {
    let filter = std::env::var("DT_LOG")
        .ok()
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(format!("dt_core={}", config.level)));

    match config.format {
        LogFormat::Human => {
            let use_ansi = std::io::stderr().is_terminal();
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(use_ansi)
                .init();
        }
        LogFormat::Jsonl => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Generate a unique run ID for this invocation.
pub fn generate_run_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    // Shorten to the first 12 hex chars for readability
    format!("run-{}", &uuid.simple().to_string()[..12])
}
