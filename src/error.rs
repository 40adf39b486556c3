use std::error::Error as StdError;
use thiserror::Error;

/// Failures that end a query before any line is printed
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid Loki URL: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::Malformed(err.to_string())
    }
}

impl QueryError {
    /// The message followed by each underlying cause, `: `-separated.
    ///
    /// reqwest's own message only names the URL; the socket or decode
    /// failure lives further down the source chain.
    pub fn with_causes(&self) -> String {
        error_chain(self)
    }
}

/// Join an error's message with its `source()` chain, skipping causes the
/// message already repeats
pub fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// How a run ended, mapped onto the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Printed,
    NoMatches,
    QueryFailed,
    NonSuccess,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Printed => 0,
            Outcome::NoMatches => 1,
            Outcome::QueryFailed => 2,
            Outcome::NonSuccess => 3,
        }
    }
}
