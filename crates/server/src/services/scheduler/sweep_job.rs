use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ratelimit::RateLimiter;

use super::traits::{JobResult, SchedulerJob};

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Evicts lapsed rate-limit windows.
///
/// Expired entries are replaced lazily when their client returns; this
/// job bounds the table for clients that never do.
pub struct RateLimitSweepJob {
    limiter: Arc<RateLimiter>,
}

impl RateLimitSweepJob {
    pub fn new(limiter: Arc<RateLimiter>) -> Self {
        Self { limiter }
    }
}

#[async_trait]
impl SchedulerJob for RateLimitSweepJob {
    fn name(&self) -> &'static str {
        "RateLimitSweep"
    }

    fn interval(&self) -> Duration {
        SWEEP_INTERVAL
    }

    async fn execute(&self) -> JobResult {
        let removed = self.limiter.sweep();
        if removed > 0 {
            tracing::info!("Rate limit sweep evicted {} expired windows", removed);
        } else {
            tracing::debug!("Rate limit sweep found no expired windows");
        }
        Ok(())
    }
}
