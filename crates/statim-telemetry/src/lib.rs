//! Logging setup for Statim binaries.
//!
//! Wraps `tracing-subscriber` so every front-end initialises logging the same
//! way: human-readable or JSON output, `RUST_LOG` taking precedence over the
//! configured default level.

pub mod logging;
