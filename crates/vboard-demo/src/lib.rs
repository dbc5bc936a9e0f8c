#![forbid(unsafe_code)]

//! Terminal driver for the windowed column board.
//!
//! Builds a [`vboard_core::Workspace`] from a fixture and configuration,
//! feeds it a scripted or recorded gesture stream, and prints each column's
//! visible window.

pub mod cli;
pub mod error;
pub mod render;
pub mod replay;

pub use cli::{Cli, run, run_from_env};
pub use error::{CliError, Result};

/// Install the stderr log subscriber. `RUST_LOG` overrides the `warn` default.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    // A global subscriber may already be installed by an embedding binary or
    // an earlier call; keeping the first one is intended.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
