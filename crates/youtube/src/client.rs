use reqwest::{Client, StatusCode};

use crate::error::YoutubeError;
use crate::models::{Video, VideoListResponse};

const BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

pub struct YoutubeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl YoutubeClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(
        client: Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Look up a single video by its native id.
    ///
    /// Issues one `videos.list` call for the snippet, content details and
    /// statistics parts. Returns `Ok(None)` when the API answers with an
    /// empty item list (unknown or private video).
    pub async fn get_video(&self, id: &str) -> crate::Result<Option<Video>> {
        let response = self
            .client
            .get(format!("{}/videos", self.base_url))
            .query(&[
                ("part", "snippet,contentDetails,statistics"),
                ("id", id),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let list: VideoListResponse = self.handle_response(response).await?;
        Ok(list.items.into_iter().next())
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            return Err(YoutubeError::QuotaExceeded);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(YoutubeError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}
