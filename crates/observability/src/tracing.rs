//! Span helpers for shade operations

/// Create a span around loading one config file
///
/// # Example
///
/// ```rust
/// use shade_observability::config_span;
///
/// let span = config_span!("shade.toml");
/// let _guard = span.enter();
/// // ... parse + validate ...
/// ```
#[macro_export]
macro_rules! config_span {
    ($path:expr) => {
        tracing::info_span!(
            "config.load",
            config.path = %$path,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Create a span around a content scan
///
/// # Example
///
/// ```rust
/// use shade_observability::scan_span;
///
/// let span = scan_span!("/work/app", "per-file");
/// let _guard = span.enter();
/// // ... walk + extract ...
/// ```
#[macro_export]
macro_rules! scan_span {
    ($root:expr, $strategy:expr) => {
        tracing::info_span!(
            "content.scan",
            scan.root = %$root,
            scan.strategy = %$strategy,
            scan.duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span
///
/// Sets `error` / `error.message` when the span declared them. The event is
/// debug-level: callers report the failure to the user themselves.
pub fn record_error<E: std::fmt::Display + ?Sized>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::debug!(error = %error, "operation failed");
}

/// Record latency/duration on the current span
///
/// # Example
///
/// ```rust
/// use shade_observability::record_duration;
/// use std::time::Instant;
///
/// let start = Instant::now();
/// // ... operation ...
/// record_duration("scan.duration_ms", start.elapsed());
/// ```
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
