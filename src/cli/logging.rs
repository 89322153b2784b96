//! Tracing initialization for the command-line tool.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the stderr log subscriber.
///
/// `level` is an `EnvFilter` directive such as `info` or
/// `approxmatch=debug`; invalid directives fall back to `warn`. Logs go to
/// stderr so that reports written to stdout stay parseable.
///
/// Only the first call has an effect.
pub fn init_tracing(level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
