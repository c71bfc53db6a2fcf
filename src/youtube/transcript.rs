//! Transcript placeholder
//!
//! Caption extraction is not implemented; callers get a fixed text that
//! names the video.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub transcript: String,
}

/// Placeholder transcript for `video_id`
pub fn mock_transcript(video_id: &str) -> Transcript {
    Transcript {
        transcript: format!(
            "Mock transcript for video {}. This would contain actual captions in production.",
            video_id
        ),
    }
}
