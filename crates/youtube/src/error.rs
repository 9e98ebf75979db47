#[derive(Debug, thiserror::Error)]
pub enum YoutubeError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The Data API answers 403 both for exhausted quota and for a
    /// rejected key; the two are indistinguishable from the outside.
    #[error("YouTube API quota exceeded or invalid API key")]
    QuotaExceeded,

    #[error("YouTube API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },
}
