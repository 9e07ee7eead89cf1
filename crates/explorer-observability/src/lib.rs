//! Observability for Product Explorer.
//!
//! Diagnostics are emitted with `tracing` throughout the workspace. This
//! crate installs the subscriber that renders them:
//!
//! - `LogFormat` - JSON lines for aggregation, or compact human output
//! - `LogLevel` - Default verbosity, overridable through `RUST_LOG`
//! - `init_logging` - Install the global subscriber once per process

pub mod logging;

pub use logging::{env_filter, init_logging, LogFormat, LogLevel, LoggingError};
