//! Rate Limiting Middleware using GCRA Algorithm
//!
//! Per-client-IP limits on the intake endpoints via tower_governor.

use crate::settings::ConfigError;
use governor::middleware::StateInformationMiddleware;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;

/// Governor config keyed by peer IP, reporting quota headers
pub type DefaultGovernorConfig =
    tower_governor::governor::GovernorConfig<PeerIpKeyExtractor, StateInformationMiddleware>;

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Whether the limiter is installed at all
    pub enabled: bool,
    /// Seconds to replenish one request
    pub per_second: u64,
    /// Burst size (max requests that can be made immediately)
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            per_second: 1,
            burst_size: 20,
        }
    }
}

impl RateLimitConfig {
    /// Check that the quota can be built
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && (self.per_second == 0 || self.burst_size == 0) {
            return Err(ConfigError::Invalid(
                "rate_limit.per_second and rate_limit.burst_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Create a rate limiting governor config
///
/// Requires the service to be served with
/// `into_make_service_with_connect_info::<SocketAddr>()` for IP extraction.
/// Adds X-RateLimit-* headers to responses.
pub fn create_governor_config(
    config: &RateLimitConfig,
) -> Result<Arc<DefaultGovernorConfig>, ConfigError> {
    config.validate()?;
    GovernorConfigBuilder::default()
        .per_second(config.per_second)
        .burst_size(config.burst_size)
        .use_headers()
        .finish()
        .map(Arc::new)
        .ok_or_else(|| ConfigError::Invalid("rate limit quota rejected".to_string()))
}
