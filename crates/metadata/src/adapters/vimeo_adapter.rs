//! Vimeo metadata provider adapter

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use vimeo::VimeoClient;

use crate::duration::{format_duration, UNKNOWN_DURATION};
use crate::sanitize::sanitize_text;
use crate::{MetadataProvider, Platform, ProviderError, VideoMetadata};

/// Vimeo provider backed by the public oEmbed endpoint.
pub struct VimeoProvider {
    client: Arc<VimeoClient>,
}

impl VimeoProvider {
    pub fn new(client: Arc<VimeoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MetadataProvider for VimeoProvider {
    async fn fetch(&self, native_id: &str) -> Result<VideoMetadata, ProviderError> {
        let oembed = self.client.get_oembed(native_id).await?;

        let duration = oembed
            .duration
            .map(format_duration)
            .unwrap_or_else(|| UNKNOWN_DURATION.to_string());
        let published_at = oembed
            .upload_date
            .unwrap_or_else(|| Utc::now().to_rfc3339());

        Ok(VideoMetadata {
            id: native_id.to_string(),
            title: sanitize_text(&oembed.title),
            description: sanitize_text(oembed.description.as_deref().unwrap_or_default()),
            thumbnail: oembed.thumbnail_url.unwrap_or_default(),
            duration,
            author: sanitize_text(oembed.author_name.as_deref().unwrap_or_default()),
            // The embed endpoint exposes no view counters.
            view_count: None,
            published_at,
            embed_url: format!("https://player.vimeo.com/video/{}", native_id),
            platform: Platform::Vimeo,
            is_embeddable: true,
        })
    }

    fn platform(&self) -> Platform {
        Platform::Vimeo
    }
}
