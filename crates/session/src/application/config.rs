//! Application Configuration
//!
//! Configuration for the session application layer.

/// Re-export LatencyProfile from platform
pub use platform::latency::LatencyProfile;

/// Session application configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Simulated network latency around the fake auth calls
    pub latency: LatencyProfile,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            latency: LatencyProfile::network_default(),
        }
    }
}

impl SessionConfig {
    /// Config for development and tests (no simulated latency)
    pub fn development() -> Self {
        Self {
            latency: LatencyProfile::none(),
        }
    }
}
