use clap::Parser;

use crate::constants::{DEFAULT_LIMIT, DEFAULT_LOKI_URL, DEFAULT_MINUTES, DEFAULT_SERVICE_RE};

/// Result sort direction requested from Loki
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

/// CLI arguments structure
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Query Loki for logs matching a given OpenTelemetry traceId.",
    long_about = None
)]
pub struct Cli {
    /// OpenTelemetry traceId (hex string).
    pub trace_id: String,

    // LOKI
    /// Loki base URL.
    #[arg(long, default_value = DEFAULT_LOKI_URL, help_heading = "LOKI")]
    pub loki: String,

    /// Lookback window in minutes.
    #[arg(
        long,
        default_value_t = DEFAULT_MINUTES,
        allow_negative_numbers = true,
        help_heading = "LOKI"
    )]
    pub minutes: i64,

    /// Regex for the docker compose "service" label.
    #[arg(long, default_value = DEFAULT_SERVICE_RE, help_heading = "LOKI")]
    pub service_re: String,

    /// Max log lines to return.
    #[arg(
        long,
        default_value_t = DEFAULT_LIMIT,
        allow_negative_numbers = true,
        help_heading = "LOKI"
    )]
    pub limit: i64,

    /// Result sort direction.
    #[arg(long, value_enum, default_value_t = Direction::Forward, help_heading = "LOKI")]
    pub direction: Direction,

    // OUTPUT
    /// Disable color output.
    #[arg(long, help_heading = "OUTPUT")]
    pub no_color: bool,

    /// Emit debug logs to stderr (overridden by RUST_LOG).
    #[arg(short, long, help_heading = "OUTPUT")]
    pub verbose: bool,
}
