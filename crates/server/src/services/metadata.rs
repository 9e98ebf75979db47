use std::sync::Arc;

use metadata::{
    classify, DirectProvider, MetadataProvider, Platform, VideoMetadata, VimeoProvider,
    YoutubeProvider,
};
use ratelimit::{RateLimitDecision, RateLimiter};

use crate::error::{AppError, AppResult};

/// Successful lookup plus the admission decision that let it through,
/// so the boundary layer can emit quota headers.
#[derive(Debug)]
pub struct FetchedVideo {
    pub metadata: VideoMetadata,
    pub rate_limit: RateLimitDecision,
}

/// Orchestrates one metadata request: admission check, URL
/// classification, then dispatch to the matching provider adapter.
pub struct MetadataService {
    limiter: Arc<RateLimiter>,
    youtube: YoutubeProvider,
    vimeo: VimeoProvider,
    direct: DirectProvider,
}

impl MetadataService {
    pub fn new(
        limiter: Arc<RateLimiter>,
        youtube: YoutubeProvider,
        vimeo: VimeoProvider,
        direct: DirectProvider,
    ) -> Self {
        Self {
            limiter,
            youtube,
            vimeo,
            direct,
        }
    }

    pub async fn fetch_by_url(&self, client_key: &str, raw_url: &str) -> AppResult<FetchedVideo> {
        let decision = self.limiter.check(client_key);
        if !decision.allowed {
            tracing::warn!(client = %client_key, "Rate limit exceeded");
            return Err(AppError::RateLimited {
                reset_at_ms: decision.reset_at_ms,
            });
        }

        // The limiter lock is released by now; classification and the
        // provider call run outside any critical section.
        let video_ref = classify(raw_url).ok_or(AppError::UnsupportedUrl)?;
        tracing::debug!(
            platform = %video_ref.platform,
            id = %video_ref.id,
            "Classified video URL"
        );

        let metadata = match video_ref.platform {
            Platform::Youtube => self.youtube.fetch(&video_ref.id).await,
            Platform::Vimeo => self.vimeo.fetch(&video_ref.id).await,
            Platform::Direct => self.direct.fetch(&video_ref.id).await,
        }?;

        Ok(FetchedVideo {
            metadata,
            rate_limit: decision,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use metadata::ProviderError;
    use vimeo::VimeoClient;

    use super::*;

    fn service(max_requests: u32) -> MetadataService {
        MetadataService::new(
            Arc::new(RateLimiter::new(max_requests, Duration::from_secs(60))),
            YoutubeProvider::unconfigured(),
            VimeoProvider::new(Arc::new(VimeoClient::new(reqwest::Client::new()))),
            DirectProvider,
        )
    }

    #[tokio::test]
    async fn unrecognized_input_is_rejected_without_provider_io() {
        let service = service(10);
        let err = service
            .fetch_by_url("client", "not a url")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedUrl));
    }

    #[tokio::test]
    async fn direct_links_resolve_and_report_remaining_quota() {
        let service = service(10);
        let fetched = service
            .fetch_by_url("client", "https://cdn.example.com/clip.mp4")
            .await
            .unwrap();

        assert_eq!(fetched.metadata.platform, Platform::Direct);
        assert!(!fetched.metadata.is_embeddable);
        assert_eq!(fetched.rate_limit.remaining, 9);
    }

    #[tokio::test]
    async fn quota_exhaustion_short_circuits_before_classification() {
        let service = service(1);
        service
            .fetch_by_url("client", "https://cdn.example.com/clip.mp4")
            .await
            .unwrap();

        // Even a well-formed URL is refused once the window is full.
        let err = service
            .fetch_by_url("client", "https://cdn.example.com/clip.mp4")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::RateLimited { .. }));

        // Another client is unaffected.
        assert!(service
            .fetch_by_url("other", "https://cdn.example.com/clip.mp4")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn missing_youtube_credential_surfaces_at_fetch_time() {
        let service = service(10);
        let err = service
            .fetch_by_url("client", "https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Provider(ProviderError::MissingApiKey)
        ));
    }
}
