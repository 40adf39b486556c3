pub mod diagnostics;
pub mod formatter;

pub use diagnostics::{Diagnostics, Severity, should_color};
pub use formatter::{format_payload, format_streams, stream_header};
