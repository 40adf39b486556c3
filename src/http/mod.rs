pub mod client;
pub mod request;

pub use client::{build_http_client, build_http_client_with_timeout};
pub use request::{build_logql_query, build_query_url, fetch_query_range, query_range_endpoint};
