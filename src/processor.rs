use anyhow::Result;
use reqwest::Client;
use std::io::Write;
use tracing::{debug, info};

use crate::error::{Outcome, QueryError};
use crate::http::{build_logql_query, build_query_url, fetch_query_range, query_range_endpoint};
use crate::output::{Diagnostics, Severity, format_payload, format_streams};
use crate::response::{Validated, validate_response};
use crate::types::Cli;
use crate::utils::TimeWindow;

/// Run one trace lookup against Loki.
///
/// Matching lines go to `out`, every diagnostic goes to `err`. The returned
/// [`Outcome`] decides the exit code; the `Err` side is reserved for failures
/// writing to either stream. `colored` only affects diagnostics.
pub async fn run<O: Write, E: Write>(
    cli: &Cli,
    client: &Client,
    window: TimeWindow,
    colored: bool,
    out: &mut O,
    err: &mut E,
) -> Result<Outcome> {
    let mut diag = Diagnostics::new(err, colored);

    let query = build_logql_query(&cli.service_re, &cli.trace_id);
    debug!(
        %query,
        start_ns = window.start_ns,
        end_ns = window.end_ns,
        "built trace query"
    );

    let url = match build_query_url(&cli.loki, &query, &window, cli.limit, cli.direction) {
        Ok(url) => url,
        Err(e) => {
            report_failure(&mut diag, &e, &query_range_endpoint(&cli.loki))?;
            return Ok(Outcome::QueryFailed);
        }
    };

    let payload = match fetch_query_range(client, &url).await {
        Ok(payload) => payload,
        Err(e) => {
            report_failure(&mut diag, &e, url.as_str())?;
            return Ok(Outcome::QueryFailed);
        }
    };

    let streams = match validate_response(payload) {
        Ok(Validated::Streams(streams)) => streams,
        Ok(Validated::NonSuccess(payload)) => {
            diag.headline(Severity::Error, "Loki returned non-success response")?;
            diag.detail(&format_payload(&payload)?)?;
            return Ok(Outcome::NonSuccess);
        }
        Ok(Validated::Empty) => {
            diag.headline(
                Severity::Notice,
                &format!(
                    "No matches for traceId={} in last {}m (service=~{}).",
                    cli.trace_id, cli.minutes, cli.service_re
                ),
            )?;
            return Ok(Outcome::NoMatches);
        }
        Err(e) => {
            report_failure(&mut diag, &e, url.as_str())?;
            return Ok(Outcome::QueryFailed);
        }
    };

    let lines = match format_streams(&streams) {
        Ok(lines) => lines,
        Err(e) => {
            report_failure(&mut diag, &e, url.as_str())?;
            return Ok(Outcome::QueryFailed);
        }
    };

    for line in &lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    info!(streams = streams.len(), lines = lines.len(), "printed matches");
    Ok(Outcome::Printed)
}

fn report_failure<W: Write>(
    diag: &mut Diagnostics<'_, W>,
    error: &QueryError,
    url: &str,
) -> std::io::Result<()> {
    debug!(error = ?error, "loki query failed");
    diag.headline(
        Severity::Error,
        &format!("Failed to query Loki: {}", error.with_causes()),
    )?;
    diag.detail(&format!("URL: {}", url))
}
