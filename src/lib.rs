pub mod constants;
pub mod error;
pub mod http;
pub mod logging;
pub mod output;
pub mod processor;
pub mod response;
pub mod types;
pub mod utils;

pub use error::{Outcome, QueryError};
pub use processor::run;
pub use types::{Cli, Direction};
