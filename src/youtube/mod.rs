//! YouTube metadata
//!
//! Data API v3 client, video ID parsing, derived insights and the
//! transcript placeholder.

pub mod client;
pub mod insights;
pub mod models;
pub mod transcript;
pub mod video_id;

pub use client::{VideoDetails, YouTubeClient};
pub use insights::{PopularityLevel, VideoInsights};
pub use models::{Channel, Video};
pub use transcript::{Transcript, mock_transcript};
pub use video_id::{extract_video_id, is_valid_video_id};
