//! Opt-in tracing bootstrap for hosts embedding `oncoband`.
//!
//! The scale and layout engines emit `debug`/`trace` events while they
//! recompute. Library code never installs a subscriber on its own; hosts
//! either call [`init_default_tracing`] or wire their own filters.

/// Installs a compact `tracing-subscriber` when the `telemetry` feature is enabled.
///
/// The filter comes from `RUST_LOG`, falling back to `info`.
/// Returns `true` on success, `false` when the feature is disabled or a global
/// subscriber was already installed by the host.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

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
