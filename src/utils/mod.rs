pub mod time;
pub mod url;

pub use time::{TimeWindow, ns_to_iso};
pub use url::normalize_base_url;
