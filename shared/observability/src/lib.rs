//! Logging setup for Kafka Connect client tools.
//!
//! The library crates only emit `tracing` events; binaries call one of the
//! `init_tracing*` functions once at startup to install a subscriber.

pub mod init;

pub use init::*;

pub use tracing::{debug, error, info, warn, trace, Level};
