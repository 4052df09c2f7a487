//! Log setup for the CLI.
//!
//! Diagnostics are `tracing` events written to stderr; the per-file report
//! printed by `crop` and `manifest` owns stdout.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used when `RUST_LOG` is unset.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber.
///
/// `verbose` lowers the default level to debug, `json_format` switches to
/// one JSON object per event. `RUST_LOG` wins over both levels.
pub fn init(verbose: bool, json_format: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let registry = tracing_subscriber::registry().with(filter);

    if json_format {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(console::Term::stderr().features().colors_supported()),
            )
            .init();
    }
}
