//! Telemetry helpers for applications embedding `chart-scale`.
//!
//! Scale computation logs through `tracing` only. Installing a subscriber is
//! left to the host unless the `telemetry` feature is enabled and one of the
//! helpers below is called.

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to `info`.
///
/// Returns `false` when the `telemetry` feature is disabled or the host
/// application already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter("info")
}

/// Same as [`init_default_tracing`], with a caller-chosen fallback directive
/// such as `"chart_scale=trace"` for step-optimization diagnostics.
#[must_use]
pub fn init_tracing_with_filter(default_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_directive;
        false
    }
}
