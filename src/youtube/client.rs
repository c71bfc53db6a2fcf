//! YouTube Data API client

use chrono::Utc;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::YouTubeConfig;
use crate::utils::error::{GatewayError, Result};
use crate::utils::sanitize_for_logging;

use super::insights::VideoInsights;
use super::models::{Channel, ListResponse, Video};

const VIDEO_PARTS: &str = "snippet,statistics,contentDetails";
const CHANNEL_PARTS: &str = "statistics,snippet";

/// Payload of the metadata routes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoDetails {
    pub video: Video,
    pub channel: Option<Channel>,
    pub insights: VideoInsights,
}

#[derive(Clone)]
pub struct YouTubeClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for YouTubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl YouTubeClient {
    /// Create a client; fails when no API key is configured
    pub fn new(config: &YouTubeConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| GatewayError::config("YouTube API key not configured"))?
            .to_string();

        let http_client = ClientBuilder::new()
            .timeout(config.request_timeout())
            .user_agent(concat!("tubesage/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Video resource with snippet, statistics and content details
    pub async fn fetch_video(&self, video_id: &str) -> Result<Video> {
        let list: ListResponse<Video> = self
            .list("videos", &[("part", VIDEO_PARTS), ("id", video_id)])
            .await?;

        list.items
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::not_found("Video not found or is private/unavailable"))
    }

    /// Channel resource; `None` when absent
    pub async fn fetch_channel(&self, channel_id: &str) -> Result<Option<Channel>> {
        let list: ListResponse<Channel> = self
            .list("channels", &[("part", CHANNEL_PARTS), ("id", channel_id)])
            .await?;
        Ok(list.items.into_iter().next())
    }

    /// Video, channel and derived insights
    ///
    /// A failed channel lookup is logged and yields `channel: None`.
    pub async fn video_details(&self, video_id: &str) -> Result<VideoDetails> {
        let video = self.fetch_video(video_id).await?;

        let channel = match video.snippet.channel_id.as_deref() {
            Some(channel_id) if !channel_id.is_empty() => {
                match self.fetch_channel(channel_id).await {
                    Ok(channel) => channel,
                    Err(e) => {
                        warn!(channel_id, error = %e, "Channel data fetch failed");
                        None
                    }
                }
            }
            _ => None,
        };

        let insights = VideoInsights::from_video(&video, Utc::now());
        Ok(VideoDetails {
            video,
            channel,
            insights,
        })
    }

    async fn list<T: DeserializeOwned>(&self, resource: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{}", self.base_url, resource);
        debug!("YouTube request: {} {:?}", url, params);

        let response = self
            .http_client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| GatewayError::YouTube(format!("Network error: {}", e.without_url())))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::YouTube(format!("Failed to read response: {}", e.without_url())))?;

        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                resource,
                body = %sanitize_for_logging(&text),
                "YouTube API error"
            );
            return Err(map_status(status));
        }

        Ok(serde_json::from_str(&text)?)
    }
}

fn map_status(status: StatusCode) -> GatewayError {
    match status {
        StatusCode::NOT_FOUND => GatewayError::not_found("Video not found"),
        StatusCode::FORBIDDEN => GatewayError::YouTubeQuota(format!("YouTube API returned {}", status)),
        _ => GatewayError::YouTube(format!("YouTube API returned {}", status)),
    }
}
