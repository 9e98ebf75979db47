//! YouTube metadata provider adapter

use std::sync::Arc;

use async_trait::async_trait;
use youtube::YoutubeClient;

use crate::duration::{format_duration, parse_iso8601_duration};
use crate::sanitize::sanitize_text;
use crate::{MetadataProvider, Platform, ProviderError, VideoMetadata};

/// YouTube provider backed by the Data API v3.
///
/// Built without a client when no API key is configured; the missing
/// credential surfaces on the first fetch instead of at startup.
pub struct YoutubeProvider {
    client: Option<Arc<YoutubeClient>>,
}

impl YoutubeProvider {
    pub fn new(client: Arc<YoutubeClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub fn unconfigured() -> Self {
        Self { client: None }
    }
}

#[async_trait]
impl MetadataProvider for YoutubeProvider {
    async fn fetch(&self, native_id: &str) -> Result<VideoMetadata, ProviderError> {
        let client = self.client.as_ref().ok_or(ProviderError::MissingApiKey)?;
        let video = client
            .get_video(native_id)
            .await?
            .ok_or(ProviderError::NotFound)?;

        let total_secs = parse_iso8601_duration(&video.content_details.duration);
        let view_count = video
            .statistics
            .view_count
            .as_deref()
            .and_then(|count| count.parse().ok());
        let snippet = video.snippet;
        let thumbnail = snippet.thumbnails.best_url().unwrap_or_default().to_string();

        Ok(VideoMetadata {
            id: native_id.to_string(),
            title: sanitize_text(&snippet.title),
            description: sanitize_text(&snippet.description),
            thumbnail,
            duration: format_duration(total_secs),
            author: sanitize_text(&snippet.channel_title),
            view_count,
            published_at: snippet.published_at,
            embed_url: format!("https://www.youtube.com/embed/{}", native_id),
            platform: Platform::Youtube,
            is_embeddable: true,
        })
    }

    fn platform(&self) -> Platform {
        Platform::Youtube
    }
}
