//! Telemetry helpers for applications embedding `axis-rs`.
//!
//! The engine emits its diagnostics (degenerate ranges, skipped data-source
//! scans) through `tracing` and never installs a subscriber on its own.
//! Hosts that do not already run one can opt in here.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The filter honors `RUST_LOG` and otherwise limits output to this crate's
/// warnings. Returns `true` when initialization succeeds, `false` when the
/// feature is disabled or another subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("axis_rs=warn"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
