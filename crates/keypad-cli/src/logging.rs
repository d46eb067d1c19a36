//! Logging setup for the `keypad` binary.
//!
//! Diagnostics go to stderr so stdout stays clean for results.
//! `RUST_LOG` takes precedence over the `-v`/`-q` flags:
//! ```bash
//! RUST_LOG=keypad_calc=debug keypad run 1 add 2 calc
//! ```

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::Verbosity;

static INIT: Once = Once::new();

/// Builds the filter for a verbosity level, honouring `RUST_LOG` when set.
#[must_use]
pub fn build_filter(verbosity: Verbosity) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(verbosity.log_filter())
    }
}

/// Installs the global subscriber. Only the first call takes effect.
pub fn init_logging(verbosity: Verbosity, color: bool) {
    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_ansi(color)
            .without_time()
            .with_filter(build_filter(verbosity));

        // A subscriber installed elsewhere (tests) is left in place.
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_logging(Verbosity::Quiet, false);
        init_logging(Verbosity::Debug, false);
        tracing::debug!("still fine after double init");
    }

    #[test]
    fn test_filter_builds_for_every_level() {
        for verbosity in [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Debug,
        ] {
            let filter = build_filter(verbosity);
            assert!(!filter.to_string().is_empty());
        }
    }
}
