use std::sync::Arc;
use std::time::Duration;

use metadata::{DirectProvider, VimeoProvider, YoutubeProvider};
use ratelimit::RateLimiter;
use vimeo::VimeoClient;
use youtube::YoutubeClient;

use crate::config::Config;
use crate::services::{MetadataService, RateLimitSweepJob, SchedulerService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub metadata: Arc<MetadataService>,
    pub scheduler: Arc<SchedulerService>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        // One shared HTTP client for every provider; provider calls are
        // the only blocking operations and carry these timeouts.
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        let limiter = Arc::new(RateLimiter::new(
            config.rate_limit_max_requests,
            config.rate_limit_window,
        ));

        let youtube = match &config.youtube_api_key {
            Some(key) => YoutubeProvider::new(Arc::new(YoutubeClient::new(
                http_client.clone(),
                key.clone(),
            ))),
            None => {
                tracing::warn!(
                    "YOUTUBE_API_KEY not set; YouTube lookups will fail until it is configured"
                );
                YoutubeProvider::unconfigured()
            }
        };
        let vimeo = VimeoProvider::new(Arc::new(VimeoClient::new(http_client)));

        let metadata = Arc::new(MetadataService::new(
            Arc::clone(&limiter),
            youtube,
            vimeo,
            DirectProvider,
        ));

        // Evict lapsed windows in the background so quiet clients do not
        // pin memory.
        let scheduler = SchedulerService::new().with_job(RateLimitSweepJob::new(limiter));
        scheduler.start();

        Self {
            config: Arc::new(config),
            metadata,
            scheduler: Arc::new(scheduler),
        }
    }
}
