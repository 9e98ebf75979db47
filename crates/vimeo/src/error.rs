#[derive(Debug, thiserror::Error)]
pub enum VimeoError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Vimeo video not found or is private")]
    NotFound,

    #[error("Vimeo API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },
}
