//! Reactor timing configuration.

use std::time::Duration;

/// Fallback timings for the session reactor
#[derive(Debug, Clone)]
pub struct ReactorConfig {
    /// Delay before loading user data when the readiness gate is absent or
    /// reported a failure (default: 2 seconds)
    pub gate_fallback_delay: Duration,
    /// One-shot delay applied when the store reports not-ready at load time
    /// (default: 1 second)
    pub store_warmup_delay: Duration,
}

impl Default for ReactorConfig {
    fn default() -> Self {
        Self {
            gate_fallback_delay: Duration::from_millis(2000),
            store_warmup_delay: Duration::from_millis(1000),
        }
    }
}

impl ReactorConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything absent or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let gate_fallback_delay = std::env::var("GATE_FALLBACK_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.gate_fallback_delay);

        let store_warmup_delay = std::env::var("STORE_WARMUP_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.store_warmup_delay);

        Self {
            gate_fallback_delay,
            store_warmup_delay,
        }
    }
}
