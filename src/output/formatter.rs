use serde_json::Value;
use std::collections::HashMap;

use crate::constants::UNKNOWN_SERVICE;
use crate::error::QueryError;
use crate::response::LogStream;
use crate::utils::ns_to_iso;

/// Header shown before each line: `service` or `service (container)`
pub fn stream_header(labels: &HashMap<String, String>) -> String {
    let service = labels
        .get("service")
        .map(String::as_str)
        .unwrap_or(UNKNOWN_SERVICE);
    match labels.get("container") {
        Some(container) if !container.is_empty() => format!("{} ({})", service, container),
        _ => service.to_string(),
    }
}

/// Render every stream's values as `<iso> <header> <line>`.
///
/// Streams keep the order Loki returned them in, as do the values inside
/// each stream. Nothing is re-sorted across streams.
pub fn format_streams(streams: &[LogStream]) -> Result<Vec<String>, QueryError> {
    let mut lines = Vec::new();
    for stream in streams {
        let header = stream_header(&stream.stream);
        for (ts_ns, line) in &stream.values {
            let ts_iso = ns_to_iso(ts_ns).ok_or_else(|| {
                QueryError::Malformed(format!("invalid timestamp {:?}", ts_ns))
            })?;
            lines.push(format!("{} {} {}", ts_iso, header, line));
        }
    }
    Ok(lines)
}

/// Pretty-print a raw payload with 2-space indent, escaping non-ASCII as
/// `\uXXXX` (UTF-16 surrogate pairs above the BMP)
pub fn format_payload(payload: &Value) -> serde_json::Result<String> {
    let pretty = serde_json::to_string_pretty(payload)?;
    if pretty.is_ascii() {
        return Ok(pretty);
    }

    let mut escaped = String::with_capacity(pretty.len());
    let mut units = [0u16; 2];
    for c in pretty.chars() {
        if c.is_ascii() {
            escaped.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                escaped.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    Ok(escaped)
}
