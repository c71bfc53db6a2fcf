//! Mock Gemini and YouTube servers

use super::fixtures::{
    GEMINI_TEST_KEY, YOUTUBE_TEST_KEY, channel_list, gemini_text_reply, video_list,
};
use serde_json::Value;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const GEMINI_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";
pub const YOUTUBE_PREFIX: &str = "/youtube/v3";

/// One mock server serving both upstreams under distinct paths
pub struct MockUpstreams {
    pub server: MockServer,
}

impl MockUpstreams {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn gemini_url(&self) -> String {
        self.server.uri()
    }

    pub fn youtube_url(&self) -> String {
        format!("{}{}", self.server.uri(), YOUTUBE_PREFIX)
    }

    /// Gemini answers `text`, expected exactly `times` times
    pub async fn gemini_replies(&self, text: &str, times: u64) {
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .and(query_param("key", GEMINI_TEST_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_text_reply(text)))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Gemini answers with `status` and `body`
    pub async fn gemini_fails(&self, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Gemini answers only after `delay`
    pub async fn gemini_stalls(&self, delay: Duration) {
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(gemini_text_reply("too late"))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// `videos.list` answers with `body`
    pub async fn youtube_video(&self, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("{}/videos", YOUTUBE_PREFIX)))
            .and(query_param("part", "snippet,statistics,contentDetails"))
            .and(query_param("key", YOUTUBE_TEST_KEY))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// `channels.list` answers with `body`
    pub async fn youtube_channel(&self, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("{}/channels", YOUTUBE_PREFIX)))
            .and(query_param("part", "statistics,snippet"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Both YouTube resources answer successfully
    pub async fn youtube_ok(&self) {
        self.youtube_video(200, video_list()).await;
        self.youtube_channel(200, channel_list()).await;
    }
}
