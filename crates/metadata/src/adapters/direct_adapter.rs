//! Direct media link adapter

use std::borrow::Cow;

use async_trait::async_trait;
use chrono::Utc;

use crate::duration::UNKNOWN_DURATION;
use crate::sanitize::sanitize_text;
use crate::{MetadataProvider, Platform, ProviderError, VideoMetadata};

const PLACEHOLDER_THUMBNAIL: &str = "/video-placeholder.png";

/// Adapter for raw media links.
///
/// Performs no network I/O; everything is derived from the URL itself
/// (the native id for direct links is the original URL).
pub struct DirectProvider;

#[async_trait]
impl MetadataProvider for DirectProvider {
    async fn fetch(&self, native_id: &str) -> Result<VideoMetadata, ProviderError> {
        let filename = native_id
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or("video");
        let decoded = urlencoding::decode(filename).unwrap_or(Cow::Borrowed(filename));

        Ok(VideoMetadata {
            id: native_id.to_string(),
            title: sanitize_text(&decoded),
            description: "Direct media file".to_string(),
            thumbnail: PLACEHOLDER_THUMBNAIL.to_string(),
            duration: UNKNOWN_DURATION.to_string(),
            author: "Direct Link".to_string(),
            view_count: None,
            published_at: Utc::now().to_rfc3339(),
            embed_url: native_id.to_string(),
            platform: Platform::Direct,
            // The file is unverified and could be arbitrary content, so
            // it is never handed to an embed frame.
            is_embeddable: false,
        })
    }

    fn platform(&self) -> Platform {
        Platform::Direct
    }
}
