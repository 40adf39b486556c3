use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use crate::constants::QUERY_RANGE_PATH;
use crate::error::QueryError;
use crate::types::Direction;
use crate::utils::{TimeWindow, normalize_base_url};

/// Build the LogQL expression selecting lines for one trace.
///
/// Both values are interpolated verbatim: quotes or braces in either one
/// change the meaning of the query.
pub fn build_logql_query(service_re: &str, trace_id: &str) -> String {
    format!(
        "{{service=~\"{}\"}} | json | traceId=\"{}\"",
        service_re, trace_id
    )
}

/// Endpoint URL without parameters, for diagnostics when the URL can't be built
pub fn query_range_endpoint(base: &str) -> String {
    format!("{}{}", normalize_base_url(base), QUERY_RANGE_PATH)
}

/// Build the full `query_range` URL with its query parameters
pub fn build_query_url(
    base: &str,
    query: &str,
    window: &TimeWindow,
    limit: i64,
    direction: Direction,
) -> Result<Url, QueryError> {
    let base = normalize_base_url(base);
    let mut url = Url::parse(&base)
        .and_then(|base_url| base_url.join(QUERY_RANGE_PATH))
        .map_err(|e| QueryError::InvalidUrl(format!("{}: {}", base, e)))?;

    url.query_pairs_mut()
        .append_pair("query", query)
        .append_pair("start", &window.start_ns.to_string())
        .append_pair("end", &window.end_ns.to_string())
        .append_pair("limit", &limit.to_string())
        .append_pair("direction", direction.as_str());

    Ok(url)
}

/// Send the range query and decode the response body as JSON
pub async fn fetch_query_range(client: &Client, url: &Url) -> Result<Value, QueryError> {
    debug!(%url, "querying loki");
    let resp = client.get(url.clone()).send().await?.error_for_status()?;
    debug!(status = %resp.status(), "loki responded");
    let payload = resp.json::<Value>().await?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_build_logql_query() {
        assert_eq!(
            build_logql_query("gateway|game", "4bf92f3577b34da6a3ce929d0e0e4736"),
            r#"{service=~"gateway|game"} | json | traceId="4bf92f3577b34da6a3ce929d0e0e4736""#
        );
    }

    #[test]
    fn test_build_logql_query_not_escaped() {
        assert_eq!(
            build_logql_query(".*", r#"abc" or x="1"#),
            r#"{service=~".*"} | json | traceId="abc" or x="1""#
        );
    }

    #[test]
    fn test_build_query_url_params() {
        let window = TimeWindow {
            start_ns: 100,
            end_ns: 200,
        };
        let query = build_logql_query("gateway", "abc");
        let url = build_query_url(
            "http://localhost:3100",
            &query,
            &window,
            50,
            Direction::Backward,
        )
        .unwrap();

        assert_eq!(url.path(), "/loki/api/v1/query_range");
        assert_eq!(
            pairs(&url),
            vec![
                ("query".to_string(), query),
                ("start".to_string(), "100".to_string()),
                ("end".to_string(), "200".to_string()),
                ("limit".to_string(), "50".to_string()),
                ("direction".to_string(), "backward".to_string()),
            ]
        );
    }

    #[test]
    fn test_build_query_url_trailing_slashes() {
        let window = TimeWindow {
            start_ns: 0,
            end_ns: 0,
        };
        let url = build_query_url("http://loki:3100//", "q", &window, 1, Direction::Forward)
            .unwrap();
        assert!(url.as_str().starts_with("http://loki:3100/loki/api/v1/query_range?"));
    }

    #[test]
    fn test_build_query_url_keeps_path_prefix() {
        let window = TimeWindow {
            start_ns: 0,
            end_ns: 0,
        };
        let url = build_query_url("https://example.com/proxy", "q", &window, 1, Direction::Forward)
            .unwrap();
        assert_eq!(url.path(), "/proxy/loki/api/v1/query_range");
    }

    #[test]
    fn test_build_query_url_invalid_base() {
        let window = TimeWindow {
            start_ns: 0,
            end_ns: 0,
        };
        let err = build_query_url("not a url", "q", &window, 1, Direction::Forward).unwrap_err();
        assert!(matches!(err, QueryError::InvalidUrl(_)));
    }

    #[test]
    fn test_query_range_endpoint() {
        assert_eq!(
            query_range_endpoint("http://loki:3100/"),
            "http://loki:3100/loki/api/v1/query_range"
        );
    }
}
