use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use metadata::ProviderError;
use serde::Serialize;
use thiserror::Error;

/// Remaining-quota response header, also sent on success.
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";
/// Window reset timestamp header, epoch milliseconds.
pub const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

/// Unified application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Quota exhausted for this client; carries the window reset time
    /// so the 429 response can tell the caller when to retry.
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited { reset_at_ms: u64 },

    /// Missing or blank URL in the request body.
    #[error("Invalid URL provided")]
    InvalidUrl,

    /// The URL parsed but matched no supported provider.
    #[error("Unsupported video URL. Please provide a YouTube, Vimeo, or direct media link.")]
    UnsupportedUrl,

    /// Provider fetch failure, including the missing-credential case.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// API error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::InvalidUrl | AppError::UnsupportedUrl => StatusCode::BAD_REQUEST,
            AppError::Provider(e) => {
                // Misconfiguration and upstream failures both flatten to
                // a generic 500 for the caller, but stay distinguishable
                // in the logs.
                match e {
                    ProviderError::MissingApiKey => {
                        tracing::error!("Configuration error: {}", e);
                    }
                    _ => tracing::error!("Provider error: {}", e),
                }
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
        };

        let mut response = (status, Json(body)).into_response();
        if let AppError::RateLimited { reset_at_ms } = self {
            let headers = response.headers_mut();
            headers.insert(RATE_LIMIT_REMAINING_HEADER, HeaderValue::from_static("0"));
            headers.insert(RATE_LIMIT_RESET_HEADER, HeaderValue::from(reset_at_ms));
        }
        response
    }
}

/// Convenience alias
pub type AppResult<T> = Result<T, AppError>;
