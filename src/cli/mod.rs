//! Command-line interface.
//!
//! Shared plumbing for the two helper binaries: argument definitions,
//! stdio transports, logging setup and diagnostics.

pub mod bazel;
pub mod docker;
pub mod output;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::core::constants;

/// Initialize the tracing subscriber.
///
/// `JFROG_HELPER_LOG` takes precedence; otherwise `--verbose` selects debug
/// output. Logs always go to stderr since stdout is the protocol channel.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(constants::ENV_LOG).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("jfrog_credential_helpers=debug")
        } else {
            EnvFilter::new("jfrog_credential_helpers=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}
