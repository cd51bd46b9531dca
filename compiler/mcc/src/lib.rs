//! mc compiler CLI support library.
//!
//! The binary in `main.rs` only dispatches; the command handlers and
//! input acquisition live here so integration tests can call them.

use std::sync::Once;

pub mod commands;
pub mod input;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup; safe to call again. Enable with
/// `MCC_LOG=mc_parse=trace` (or any `tracing_subscriber` filter).
/// Output goes to stderr so token and AST dumps on stdout stay clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("MCC_LOG").is_ok() {
            let filter = EnvFilter::from_env("MCC_LOG");
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
