//! YouTube metadata and transcript endpoints

use crate::core::gateway::parse_body;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use crate::youtube::{YouTubeClient, extract_video_id, mock_transcript};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

const INVALID_VIDEO: &str = "Invalid YouTube URL or video ID";

/// Configure metadata routes (inside the `/api` scope)
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/video/{video_id}", web::get().to(get_video))
        .route("/youtube", web::post().to(lookup_video))
        .route("/transcript/{video_id}", web::get().to(get_transcript));
}

/// `POST /api/youtube` body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoLookup {
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl VideoLookup {
    /// Video ID from `videoId`, falling back to `url`
    pub fn resolve(&self) -> Option<String> {
        self.video_id
            .as_deref()
            .and_then(extract_video_id)
            .or_else(|| self.url.as_deref().and_then(extract_video_id))
    }
}

pub async fn get_video(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let video_id = extract_video_id(&path).ok_or_else(|| GatewayError::bad_request(INVALID_VIDEO))?;
    video_response(&state, &video_id).await
}

pub async fn lookup_video(
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let lookup: VideoLookup = serde_json::from_value(Value::Object(parse_body(&body)?))
        .map_err(|_| GatewayError::bad_request(INVALID_VIDEO))?;
    let video_id = lookup
        .resolve()
        .ok_or_else(|| GatewayError::bad_request(INVALID_VIDEO))?;
    video_response(&state, &video_id).await
}

pub async fn get_transcript(path: web::Path<String>) -> Result<HttpResponse> {
    let video_id = extract_video_id(&path).ok_or_else(|| GatewayError::bad_request(INVALID_VIDEO))?;
    Ok(HttpResponse::Ok().json(mock_transcript(&video_id)))
}

async fn video_response(state: &AppState, video_id: &str) -> Result<HttpResponse> {
    debug!(video_id, "Fetching video details");
    let details = youtube_client(state)?.video_details(video_id).await?;
    Ok(HttpResponse::Ok().json(details))
}

fn youtube_client(state: &AppState) -> Result<&YouTubeClient> {
    state
        .youtube
        .as_ref()
        .ok_or_else(|| GatewayError::config("YouTube API key not configured"))
}
