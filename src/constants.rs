/// Loki defaults
pub const DEFAULT_LOKI_URL: &str = "http://localhost:3100";
pub const DEFAULT_SERVICE_RE: &str = "gateway|game|balance|player|event|notify";
pub const DEFAULT_MINUTES: i64 = 15;
pub const DEFAULT_LIMIT: i64 = 200;
pub const QUERY_RANGE_PATH: &str = "loki/api/v1/query_range";
pub const SUCCESS_STATUS: &str = "success";

/// HTTP constants
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Time conversion constants
pub const NANOS_PER_SECOND: f64 = 1_000_000_000.0;
pub const MICROS_PER_SECOND: f64 = 1_000_000.0;
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Label used when a stream carries no service label
pub const UNKNOWN_SERVICE: &str = "?";
