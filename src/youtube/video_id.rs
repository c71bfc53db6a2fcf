//! YouTube video ID extraction

use once_cell::sync::Lazy;
use regex::Regex;

static BARE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("Invalid video id regex"));

static URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"youtu\.be/([A-Za-z0-9_-]{11})",
        r"youtube\.com/watch\?v=([A-Za-z0-9_-]{11})",
        r"youtube\.com/embed/([A-Za-z0-9_-]{11})",
        r"youtube\.com/v/([A-Za-z0-9_-]{11})",
        r"youtube\.com/shorts/([A-Za-z0-9_-]{11})",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid video url regex"))
    .collect()
});

/// Whether `id` has the shape of a video ID
pub fn is_valid_video_id(id: &str) -> bool {
    BARE_ID.is_match(id)
}

/// Extract the video ID from a bare ID or any supported URL form
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();
    if is_valid_video_id(input) {
        return Some(input.to_string());
    }

    URL_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(input))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}
