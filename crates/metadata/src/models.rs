use std::fmt;

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Supported video platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub enum Platform {
    Youtube,
    Vimeo,
    Direct,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Youtube => "youtube",
            Self::Vimeo => "vimeo",
            Self::Direct => "direct",
        };
        f.write_str(name)
    }
}

/// A classified video reference.
///
/// The id format is provider-specific: an 11-character token for
/// YouTube, a decimal string for Vimeo, the original URL for direct
/// media links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRef {
    pub platform: Platform,
    pub id: String,
}

/// The normalized record all provider responses map into.
///
/// Free-text fields (title, description, author) are sanitized before
/// they land here. Produced fresh per request and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct VideoMetadata {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    /// `H:MM:SS` / `M:SS`, or [`crate::UNKNOWN_DURATION`].
    pub duration: String,
    pub author: String,
    /// Absent for providers that expose no counters (Vimeo, direct links).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    /// ISO 8601 timestamp as reported by the provider.
    pub published_at: String,
    pub embed_url: String,
    pub platform: Platform,
    /// False only for direct links, which are never embedded.
    pub is_embeddable: bool,
}
