//! Tracing setup for the harness binary
//!
//! Logs go to stderr so stdout stays clean for the report, including
//! the `--json` form. `RUST_LOG` overrides the verbosity flag.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "warn,gauntlet_cli=debug,gauntlet_token=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
