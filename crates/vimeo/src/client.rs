use reqwest::{Client, StatusCode};

use crate::error::VimeoError;
use crate::models::Oembed;

const BASE_URL: &str = "https://vimeo.com";

/// Client for Vimeo's public oEmbed endpoint.
///
/// The endpoint needs no credentials for public videos; private videos
/// answer 404.
pub struct VimeoClient {
    client: Client,
    base_url: String,
}

impl VimeoClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch embed info for a video by its numeric id.
    pub async fn get_oembed(&self, video_id: &str) -> crate::Result<Oembed> {
        let video_url = format!("https://vimeo.com/{}", video_id);
        let response = self
            .client
            .get(format!("{}/api/oembed.json", self.base_url))
            .query(&[("url", video_url.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(VimeoError::NotFound);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(VimeoError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}
