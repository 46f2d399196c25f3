//! Logging setup for providers
//!
//! Logs always go to stderr; stdout belongs to the host handshake.
//! `RUST_LOG` selects the filter, e.g. `RUST_LOG=leaseweb=debug`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn stderr_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

/// Installs the global subscriber, defaulting to `info`
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(filter("info"))
        .with(stderr_layer())
        .init();
}

/// Like [`init_logging`] but returns false instead of panicking when a subscriber exists
pub fn try_init_logging(default_level: &str) -> bool {
    tracing_subscriber::registry()
        .with(filter(default_level))
        .with(stderr_layer())
        .try_init()
        .is_ok()
}
