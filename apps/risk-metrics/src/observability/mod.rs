//! Observability module for structured logging.
//!
//! Logs go to stderr so the report on stdout stays clean.

mod logging;

pub use logging::{build_env_filter, init_logging};
