use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::constants::SUCCESS_STATUS;
use crate::error::QueryError;

/// One Loki stream: a label set and its `[timestamp_ns, line]` pairs
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LogStream {
    #[serde(default)]
    pub stream: HashMap<String, String>,
    #[serde(default)]
    pub values: Vec<(String, String)>,
}

#[derive(Debug, Default, Deserialize)]
struct QueryData {
    #[serde(default)]
    result: Vec<LogStream>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    data: QueryData,
}

/// What a decoded `query_range` payload amounts to
#[derive(Debug)]
pub enum Validated {
    Streams(Vec<LogStream>),
    Empty,
    /// Loki answered but `status` wasn't "success"; the payload is kept for display.
    NonSuccess(Value),
}

/// Check the envelope status and pull out the result streams
pub fn validate_response(payload: Value) -> Result<Validated, QueryError> {
    if payload.get("status").and_then(Value::as_str) != Some(SUCCESS_STATUS) {
        return Ok(Validated::NonSuccess(payload));
    }

    let response: QueryResponse = serde_json::from_value(payload)?;
    if response.data.result.is_empty() {
        return Ok(Validated::Empty);
    }
    Ok(Validated::Streams(response.data.result))
}
