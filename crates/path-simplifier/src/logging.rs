/*!
Logging and profiling setup for the command line.

Log output goes to stderr through a `tracing-subscriber` fmt layer filtered by
`RUST_LOG` (default `info`). With the `profiling` feature a `tracing-chrome`
layer additionally records every span into a `trace-*.json` file, flushed when
the returned guard is dropped.
*/

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const DEFAULT_FILTER: &str = "info";

/// Keeps the profiling output alive until the end of `main`
#[must_use = "dropping the guard ends profiling"]
pub struct LoggingGuard {
    #[cfg(feature = "profiling")]
    _chrome: tracing_chrome::FlushGuard,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Must be called once, before any logging.
#[cfg(feature = "profiling")]
pub fn setup_logging() -> LoggingGuard {
    let (chrome_layer, guard) = tracing_chrome::ChromeLayerBuilder::new().build();
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter());

    tracing_subscriber::registry()
        .with(chrome_layer)
        .with(fmt_layer)
        .init();

    tracing::info!("Tracing initialized with chrome profiling layer");
    LoggingGuard { _chrome: guard }
}

/// Install the global subscriber. Must be called once, before any logging.
#[cfg(not(feature = "profiling"))]
pub fn setup_logging() -> LoggingGuard {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter());
    tracing_subscriber::registry().with(fmt_layer).init();

    tracing::debug!("Logging initialized (profiling disabled in this build)");
    LoggingGuard {}
}
