//! Logging setup for the fob-compose CLI.
//!
//! Log lines go to stderr so stdout carries nothing but the descriptor.
//!
//! The filter is picked in this order:
//! 1. `--verbose`: debug for the fob-compose crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. otherwise info for the fob-compose crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "fob_compose=debug,fob_compose_cli=debug";
const QUIET_FILTER: &str = "fob_compose=error,fob_compose_cli=error";
const DEFAULT_FILTER: &str = "fob_compose=info,fob_compose_cli=info";

/// Install the global tracing subscriber. Call once, before any logging.
///
/// # Examples
///
/// ```rust,no_run
/// use fob_compose_cli::logger::init_logger;
///
/// // Debug logging, no ANSI escapes
/// init_logger(true, false, true);
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = select_filter(verbose, quiet);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn select_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Check if colored log output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal behind stderr decides.
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
