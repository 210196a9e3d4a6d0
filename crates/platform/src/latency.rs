//! Simulated Network Latency
//!
//! The marketplace backend is simulated entirely in-process; auth calls
//! still take a visible moment, like the fake network requests in the
//! original UI. Profiles keep that delay configurable and zero in tests.

use std::time::Duration;

use rand::Rng;

/// Latency profile: fixed base delay plus uniform random jitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub base: Duration,
    pub jitter: Duration,
}

impl LatencyProfile {
    /// No delay at all (tests, instant mode)
    pub const fn none() -> Self {
        Self {
            base: Duration::ZERO,
            jitter: Duration::ZERO,
        }
    }

    /// Default profile for the demo shell, tuned to feel like a fake
    /// network round-trip.
    pub const fn network_default() -> Self {
        Self {
            base: Duration::from_millis(350),
            jitter: Duration::from_millis(250),
        }
    }

    /// Sleep for `base + random(0..=jitter)`
    pub async fn wait(&self) {
        if self.base.is_zero() && self.jitter.is_zero() {
            return;
        }

        let jitter_ms = self.jitter.as_millis() as u64;
        let extra = if jitter_ms == 0 {
            0
        } else {
            rand::rng().random_range(0..=jitter_ms)
        };

        tokio::time::sleep(self.base + Duration::from_millis(extra)).await;
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::network_default()
    }
}
