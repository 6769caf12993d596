//! Job estimate engine for on-site concrete cutting work.
//!
//! This crate prices concrete-cutting jobs (core drilling, wall sawing,
//! hand-held chain saw, hand saw, slab sawing and standalone labor) from a
//! rate profile, a list of line items and a set of additional costs, and
//! serves the engine over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initializes tracing output, filtered by `RUST_LOG` (default `info`).
///
/// Can only be called once per process.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
