//! Logging setup for the console binary.
//!
//! Events go to stderr so the game transcript on stdout stays clean.
//! The filter is fixed in code: the crate's own events from `INFO` up,
//! everything else from `WARN` up.

use std::io;

use tracing::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;

/// Target of events from this crate, library and binary alike.
pub const CRATE_TARGET: &str = "card_sim";

/// Per-target level filter used by the binary.
#[must_use]
pub fn stderr_filter() -> Targets {
    Targets::new()
        .with_target(CRATE_TARGET, Level::INFO)
        .with_default(Level::WARN)
}

/// Install the global subscriber: a fmt layer on stderr behind `stderr_filter`.
///
/// Fails if a global subscriber is already set.
pub fn init() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(stderr_filter())
        .try_init()
}
