use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, span, trace, warn, Level, Span};

/// Initialize the tracing system
///
/// Reads the filter from `RUST_LOG` (falling back to `info`) and writes
/// compact lines to stderr, so stdout stays free for resolved values.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Create a span covering the resolution of one variable
pub fn resolve_span(key: &str) -> Span {
    span!(Level::TRACE, "resolve", key = %key)
}

/// Emit a structured event for resolution cache lookups
pub fn cache_event(key: &str, hit: bool) {
    if hit {
        trace!(key = %key, "cache_hit");
    } else {
        trace!(key = %key, "cache_miss");
    }
}

/// Emit a structured event for a completed resolution
pub fn resolved_event(key: &str, cached: bool) {
    debug!(key = %key, cached = %cached, "resolved");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_without_subscriber_are_noops() {
        let span = resolve_span("APP_NAME");
        let _entered = span.enter();
        cache_event("APP_NAME", true);
        cache_event("APP_NAME", false);
        resolved_event("APP_NAME", true);
    }

    #[test]
    fn test_init_twice_reports_error() {
        // Only one global subscriber can be installed per process
        let _ = init();
        assert!(init().is_err());
    }
}
