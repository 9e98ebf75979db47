use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<Video>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub snippet: Snippet,
    pub content_details: ContentDetails,
    #[serde(default)]
    pub statistics: Statistics,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub channel_title: String,
    pub published_at: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    /// Preferred display variant: `high` when present, else `default`.
    pub fn best_url(&self) -> Option<&str> {
        self.high
            .as_ref()
            .or(self.default.as_ref())
            .map(|thumbnail| thumbnail.url.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    /// ISO 8601 duration expression, e.g. `PT3M33S`.
    pub duration: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// The API serializes counters as decimal strings.
    pub view_count: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_video_list_response() {
        let json = r#"{
            "kind": "youtube#videoListResponse",
            "items": [{
                "id": "dQw4w9WgXcQ",
                "snippet": {
                    "title": "Example",
                    "description": "A video",
                    "channelTitle": "Example Channel",
                    "publishedAt": "2009-10-25T06:57:33Z",
                    "thumbnails": {
                        "default": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg" },
                        "high": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg" }
                    }
                },
                "contentDetails": { "duration": "PT3M33S" },
                "statistics": { "viewCount": "1000000" }
            }]
        }"#;

        let list: VideoListResponse = serde_json::from_str(json).unwrap();
        let video = &list.items[0];
        assert_eq!(video.id, "dQw4w9WgXcQ");
        assert_eq!(video.snippet.channel_title, "Example Channel");
        assert_eq!(video.content_details.duration, "PT3M33S");
        assert_eq!(video.statistics.view_count.as_deref(), Some("1000000"));
        assert_eq!(
            video.snippet.thumbnails.best_url(),
            Some("https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
    }

    #[test]
    fn missing_high_thumbnail_falls_back_to_default() {
        let thumbnails: Thumbnails = serde_json::from_str(
            r#"{ "default": { "url": "https://i.ytimg.com/vi/x/default.jpg" } }"#,
        )
        .unwrap();
        assert_eq!(
            thumbnails.best_url(),
            Some("https://i.ytimg.com/vi/x/default.jpg")
        );
    }

    #[test]
    fn empty_item_list_deserializes() {
        let list: VideoListResponse = serde_json::from_str(r#"{ "items": [] }"#).unwrap();
        assert!(list.items.is_empty());
    }
}
