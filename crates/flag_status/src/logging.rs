// crates/flag_status/src/logging.rs

//! Diagnostics on stderr. Stdout carries only the status report.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str =
    "warn,flag_status=debug,find_status_line=debug,get_page=debug,get_status=debug,show_status=debug";

/// Installs the subscriber. `log` records from the library crates are bridged in.
///
/// `--verbose` turns on debug output for this workspace's crates; otherwise
/// `RUST_LOG` is honoured and the level defaults to `warn`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
