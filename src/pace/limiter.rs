//! Token bucket pacing
//!
//! A provided [`PauseHook`] backed by the governor crate, for callers that
//! want a steady request rate instead of a fixed sleep.

use super::PauseHook;
use crate::error::Result;
use crate::types::ValueMap;
use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Token bucket pause hook
///
/// `pause` waits until the bucket grants a token. The context map is
/// ignored.
#[derive(Clone)]
pub struct RateLimitHook {
    limiter: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
    requests_per_second: u32,
    burst_size: u32,
}

impl RateLimitHook {
    /// Create a hook granting `requests_per_second` tokens with the given
    /// burst capacity (both clamped to at least 1)
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        let quota =
            Quota::per_second(NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::MIN))
                .allow_burst(NonZeroU32::new(burst_size).unwrap_or(NonZeroU32::MIN));

        Self {
            limiter: Arc::new(Governor::direct(quota)),
            requests_per_second: requests_per_second.max(1),
            burst_size: burst_size.max(1),
        }
    }

    /// One request per second, no burst
    pub fn per_second() -> Self {
        Self::new(1, 1)
    }

    /// Requests granted per second
    pub fn requests_per_second(&self) -> u32 {
        self.requests_per_second
    }

    /// Burst capacity
    pub fn burst_size(&self) -> u32 {
        self.burst_size
    }
}

#[async_trait]
impl PauseHook for RateLimitHook {
    async fn pause(&self, _context: &ValueMap) -> Result<()> {
        self.limiter.until_ready().await;
        Ok(())
    }
}

impl std::fmt::Debug for RateLimitHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimitHook")
            .field("requests_per_second", &self.requests_per_second)
            .field("burst_size", &self.burst_size)
            .finish()
    }
}
