//! Diagnostic stream configuration using tracing
//!
//! Diagnostics (status, progress, errors) are a separate observable
//! channel from primary command output: they go to stderr, while the
//! output sink owns stdout. Scripts consume one, humans read both.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the diagnostic stream.
///
/// Log level is controlled by the `MCUFLASH_LOG` environment variable
/// and defaults to `info`. Device-originated text (banner, command
/// responses) is logged under the `device` target; tool status under
/// the crate targets.
///
/// # Examples
/// ```bash
/// MCUFLASH_LOG=debug mcuflash-driver fsinfo
/// ```
pub fn init() {
    let env_filter =
        EnvFilter::try_from_env("MCUFLASH_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        )
        .init();
}
