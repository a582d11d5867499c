//! Logging init: human-readable diagnostics on stderr.
//!
//! Stdout is reserved for the scraped result, so every `tracing` event goes to
//! stderr. `RUST_LOG` takes precedence over the verbosity flag.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,ascrape_core=debug,ascrape=debug";

/// Pick the filter directive used when `RUST_LOG` is unset.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Initialize logging to stderr. Safe to call more than once; later calls are no-ops.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("ascrape logging initialized (verbose = {})", verbose);
    }
}
