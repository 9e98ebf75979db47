//! Error types for metadata provider operations

/// Errors that can occur while fetching provider metadata
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Checked per fetch, not at startup: the service runs fine without
    /// a key until a YouTube URL actually comes in.
    #[error("YouTube API key is not configured (set YOUTUBE_API_KEY)")]
    MissingApiKey,

    #[error("Video not found or is private")]
    NotFound,

    #[error("YouTube error: {0}")]
    Youtube(#[from] youtube::YoutubeError),

    #[error("Vimeo error: {0}")]
    Vimeo(#[from] vimeo::VimeoError),
}
