use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue};
use axum::Json;

use crate::error::{AppError, AppResult, RATE_LIMIT_REMAINING_HEADER, RATE_LIMIT_RESET_HEADER};
use crate::models::{MetadataRequest, MetadataResponse};
use crate::services::identify_client;
use crate::state::AppState;

/// Fetch normalized metadata for a video URL
#[utoipa::path(
    post,
    path = "/api/metadata",
    tag = "metadata",
    request_body = MetadataRequest,
    responses(
        (status = 200, description = "Normalized video metadata", body = MetadataResponse),
        (status = 400, description = "Invalid or unsupported video URL", body = MetadataResponse),
        (status = 429, description = "Rate limit exceeded", body = MetadataResponse),
        (status = 500, description = "Provider failure or misconfiguration", body = MetadataResponse)
    )
)]
pub async fn fetch_metadata(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<MetadataRequest>,
) -> AppResult<(HeaderMap, Json<MetadataResponse>)> {
    if request.url.trim().is_empty() {
        return Err(AppError::InvalidUrl);
    }

    let client_key = identify_client(&headers);
    let fetched = state.metadata.fetch_by_url(&client_key, &request.url).await?;

    let mut response_headers = HeaderMap::new();
    response_headers.insert(
        RATE_LIMIT_REMAINING_HEADER,
        HeaderValue::from(fetched.rate_limit.remaining),
    );
    response_headers.insert(
        RATE_LIMIT_RESET_HEADER,
        HeaderValue::from(fetched.rate_limit.reset_at_ms),
    );

    Ok((response_headers, Json(MetadataResponse::ok(fetched.metadata))))
}
