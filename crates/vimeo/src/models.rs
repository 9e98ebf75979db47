use serde::Deserialize;

/// Subset of the oEmbed response the service consumes.
///
/// Vimeo omits fields freely (no description on some videos, no duration
/// on live events), so everything beyond the title is optional.
#[derive(Debug, Deserialize)]
pub struct Oembed {
    pub title: String,
    pub description: Option<String>,
    pub author_name: Option<String>,
    pub thumbnail_url: Option<String>,
    /// Duration in whole seconds.
    pub duration: Option<u64>,
    pub upload_date: Option<String>,
}
