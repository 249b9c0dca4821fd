//! Telemetry helpers for applications embedding `chart-compose`.
//!
//! Layout and candle code only emits `tracing` events; installing a
//! subscriber is left to the host. `init_default_tracing` is a convenience
//! for binaries and tests that do not wire their own.

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is
/// enabled.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`, so the
/// multiple-axis truncation warning is visible out of the box.
///
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
