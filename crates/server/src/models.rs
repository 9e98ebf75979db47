use metadata::VideoMetadata;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for a metadata lookup.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MetadataRequest {
    /// The video URL to look up.
    pub url: String,
}

/// Envelope returned by the metadata endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct MetadataResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<VideoMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MetadataResponse {
    pub fn ok(data: VideoMetadata) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}
