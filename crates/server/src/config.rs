use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Requests admitted per client per window.
    pub rate_limit_max_requests: u32,
    /// Length of the fixed rate-limit window.
    pub rate_limit_window: Duration,
    /// Tolerated as absent until a YouTube fetch is attempted.
    pub youtube_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let window_ms: u64 = read_parsed("RATE_LIMIT_WINDOW_MS", 60_000);

        Self {
            port: read_parsed("PORT", 3000),
            rate_limit_max_requests: read_parsed("RATE_LIMIT_MAX_REQUESTS", 10),
            rate_limit_window: Duration::from_millis(window_ms),
            youtube_api_key: env::var("YOUTUBE_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
        }
    }
}

fn read_parsed<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
