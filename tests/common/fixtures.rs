//! Test fixtures and data factories

use serde_json::{Value, json};
use tubesage::config::{Config, GeminiConfig, YouTubeConfig};

pub const GEMINI_TEST_KEY: &str = "gemini-test-key";
pub const YOUTUBE_TEST_KEY: &str = "youtube-test-key";
pub const VIDEO_ID: &str = "dQw4w9WgXcQ";
pub const CHANNEL_ID: &str = "UCuAXFkgsw1L7xaCfnd5JJOw";

/// Factory for gateway configurations
pub struct ConfigFactory;

impl ConfigFactory {
    /// Both upstreams pointed at mock servers, keys set
    pub fn with_upstreams(gemini_url: &str, youtube_url: &str) -> Config {
        Config {
            gemini: GeminiConfig {
                api_key: Some(GEMINI_TEST_KEY.to_string()),
                base_url: gemini_url.to_string(),
                ..Default::default()
            },
            youtube: YouTubeConfig {
                api_key: Some(YOUTUBE_TEST_KEY.to_string()),
                base_url: youtube_url.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// No upstream keys
    pub fn without_keys() -> Config {
        Config::default()
    }

    /// Override the rate limit
    pub fn with_limit(mut config: Config, max_requests: u32) -> Config {
        config.rate_limit.max_requests = max_requests;
        config
    }
}

/// `generateContent` reply with one text candidate
pub fn gemini_text_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 42, "candidatesTokenCount": 7, "totalTokenCount": 49 }
    })
}

/// Google-style error envelope
pub fn google_error(code: u16, message: &str) -> Value {
    json!({ "error": { "code": code, "message": message, "status": "ERROR" } })
}

/// `videos.list` reply for [`VIDEO_ID`]
pub fn video_list() -> Value {
    json!({
        "kind": "youtube#videoListResponse",
        "items": [{
            "kind": "youtube#video",
            "id": VIDEO_ID,
            "snippet": {
                "publishedAt": "2009-10-25T06:57:33Z",
                "channelId": CHANNEL_ID,
                "title": "Rick Astley - Never Gonna Give You Up (Official Music Video)",
                "description": "The official video for Never Gonna Give You Up.",
                "channelTitle": "Rick Astley",
                "tags": ["rick astley", "music"]
            },
            "statistics": {
                "viewCount": "1500000000",
                "likeCount": "17000000",
                "commentCount": "2300000"
            },
            "contentDetails": { "duration": "PT3M33S", "definition": "hd" }
        }]
    })
}

/// `channels.list` reply for [`CHANNEL_ID`]
pub fn channel_list() -> Value {
    json!({
        "items": [{
            "id": CHANNEL_ID,
            "snippet": { "title": "Rick Astley" },
            "statistics": { "subscriberCount": "4000000", "videoCount": "300" }
        }]
    })
}

pub fn empty_list() -> Value {
    json!({ "items": [] })
}
