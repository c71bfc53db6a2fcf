//! Derived video insights shown next to the metadata

use super::models::Video;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static ISO_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("Invalid duration regex")
});

const NOT_AVAILABLE: &str = "N/A";

/// Keyword table, checked in order; the first category with a hit wins
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Tutorial/Educational",
        &["tutorial", "how to", "guide", "learn", "education", "course", "lesson", "teaching", "explain"],
    ),
    (
        "Gaming",
        &["game", "gaming", "gameplay", "walkthrough", "let's play", "review", "trailer", "stream"],
    ),
    (
        "Music",
        &["music", "song", "album", "artist", "concert", "cover", "remix", "audio", "lyrics"],
    ),
    (
        "Technology",
        &["tech", "review", "unboxing", "gadget", "phone", "computer", "software", "app"],
    ),
    (
        "Entertainment",
        &["funny", "comedy", "entertainment", "reaction", "prank", "challenge", "vlog"],
    ),
    (
        "News",
        &["news", "breaking", "update", "report", "politics", "current", "today"],
    ),
    (
        "Sports",
        &["sport", "football", "basketball", "soccer", "match", "game", "highlights"],
    ),
    (
        "Beauty/Fashion",
        &["makeup", "beauty", "fashion", "style", "outfit", "skincare", "hair"],
    ),
    (
        "Cooking/Food",
        &["recipe", "cooking", "food", "kitchen", "chef", "baking", "restaurant"],
    ),
];

/// Popularity bucket by view count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PopularityLevel {
    Viral,
    #[serde(rename = "Very Popular")]
    VeryPopular,
    Popular,
    Moderate,
    Growing,
}

impl PopularityLevel {
    pub fn from_views(views: u64) -> Self {
        match views {
            v if v > 10_000_000 => PopularityLevel::Viral,
            v if v > 1_000_000 => PopularityLevel::VeryPopular,
            v if v > 100_000 => PopularityLevel::Popular,
            v if v > 10_000 => PopularityLevel::Moderate,
            _ => PopularityLevel::Growing,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PopularityLevel::Viral => "Viral",
            PopularityLevel::VeryPopular => "Very Popular",
            PopularityLevel::Popular => "Popular",
            PopularityLevel::Moderate => "Moderate",
            PopularityLevel::Growing => "Growing",
        }
    }
}

/// Everything the UI shows beside the raw metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInsights {
    pub category: String,
    pub popularity: PopularityLevel,
    pub engagement_rate: String,
    pub formatted_views: String,
    pub formatted_likes: String,
    pub formatted_comments: String,
    pub formatted_duration: String,
    pub published_ago: String,
}

impl VideoInsights {
    pub fn from_video(video: &Video, now: DateTime<Utc>) -> Self {
        let stats = video.statistics.clone().unwrap_or_default();
        let (views, likes, comments) = (stats.views(), stats.likes(), stats.comments());

        let duration = video
            .content_details
            .as_ref()
            .and_then(|details| details.duration.as_deref());

        let published_ago = video
            .snippet
            .published_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|published| format_relative_date(published.with_timezone(&Utc), now))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            category: detect_category(
                &video.snippet.title,
                &video.snippet.description,
                &video.snippet.tags,
            )
            .to_string(),
            popularity: PopularityLevel::from_views(views.unwrap_or(0)),
            engagement_rate: engagement_rate(views, likes, comments)
                .map(|rate| format!("{:.2}%", rate))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            formatted_views: format_count(views),
            formatted_likes: format_count(likes),
            formatted_comments: format_count(comments),
            formatted_duration: duration
                .map(format_duration)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            published_ago,
        }
    }
}

/// Compact count: `1.5K`, `3.4M`, `1.0B`
pub fn format_count(count: Option<u64>) -> String {
    let Some(n) = count else {
        return NOT_AVAILABLE.to_string();
    };

    match n {
        n if n >= 1_000_000_000 => format!("{:.1}B", n as f64 / 1e9),
        n if n >= 1_000_000 => format!("{:.1}M", n as f64 / 1e6),
        n if n >= 1_000 => format!("{:.1}K", n as f64 / 1e3),
        n => n.to_string(),
    }
}

/// ISO-8601 duration as `m:ss` or `h:mm:ss`
pub fn format_duration(iso: &str) -> String {
    let Some(captures) = ISO_DURATION.captures(iso) else {
        return NOT_AVAILABLE.to_string();
    };

    let part = |i: usize| -> u64 {
        captures
            .get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };
    let (hours, minutes, seconds) = (part(1), part(2), part(3));

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Relative age in days, months (30 days) or years (365 days)
pub fn format_relative_date(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    const DAY_MS: i64 = 24 * 60 * 60 * 1000;
    let diff_ms = (now - published).num_milliseconds().abs();
    // Partial days round up
    let days = (diff_ms + DAY_MS - 1) / DAY_MS;

    match days {
        1 => "1 day ago".to_string(),
        d if d < 30 => format!("{} days ago", d),
        d if d < 365 => format!("{} months ago", d / 30),
        d => format!("{} years ago", d / 365),
    }
}

/// First matching category from the keyword table, else `General`
pub fn detect_category(title: &str, description: &str, tags: &[String]) -> &'static str {
    let text = format!("{} {} {}", title, description, tags.join(" ")).to_lowercase();

    CATEGORIES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or("General")
}

/// `(likes + comments) / views * 100`; `None` without views
pub fn engagement_rate(views: Option<u64>, likes: Option<u64>, comments: Option<u64>) -> Option<f64> {
    let views = views.filter(|v| *v > 0)?;
    let engagement = likes.unwrap_or(0) + comments.unwrap_or(0);
    Some(engagement as f64 / views as f64 * 100.0)
}
