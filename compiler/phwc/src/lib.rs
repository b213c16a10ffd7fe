//! Phwc - command-line front end.
//!
//! Selects a source file or inline snippet and feeds it to a
//! [`phw_eval::Engine`]. Each command returns the process exit code.

mod args;
pub mod commands;

use std::sync::Once;

pub use args::{parse_args, Invocation};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=phw_eval=debug` or `RUST_LOG=phw_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
