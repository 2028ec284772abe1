//! Placeholder media references returned by the thumbnail and video generators.

use serde::{Deserialize, Serialize};

use super::{Choice, VideoStyle};

/// Default host for placeholder images.
pub const DEFAULT_PLACEHOLDER_BASE_URL: &str = "https://via.placeholder.com";

const THUMBNAIL_COLORS: [&str; 4] = ["6366f1", "8b5cf6", "06b6d4", "ec4899"];
const VIDEO_COLORS: [&str; 3] = ["8b5cf6", "06b6d4", "ec4899"];

/// A generated (placeholder) media item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    /// Short caption, e.g. `Thumbnail 1` or `30s • modern style`.
    pub label: String,
    pub url: String,
}

fn placeholder_url(base: &str, size: &str, color: &str, text: &str) -> String {
    format!(
        "{}/{size}/{color}/ffffff?text={}",
        base.trim_end_matches('/'),
        text.replace(' ', "+")
    )
}

/// The four canned thumbnails.
#[must_use]
pub fn thumbnails(base: &str) -> Vec<MediaRef> {
    THUMBNAIL_COLORS
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let text = format!("Thumbnail {}", i + 1);
            MediaRef {
                url: placeholder_url(base, "400x225", color, &text),
                label: text,
            }
        })
        .collect()
}

/// The three canned videos, captioned with the requested duration and style.
#[must_use]
pub fn videos(base: &str, duration_secs: u32, style: VideoStyle) -> Vec<MediaRef> {
    VIDEO_COLORS
        .iter()
        .enumerate()
        .map(|(i, color)| MediaRef {
            url: placeholder_url(
                base,
                "640x360",
                color,
                &format!("Generated Video {}", i + 1),
            ),
            label: format!("{duration_secs}s • {} style", style.value()),
        })
        .collect()
}
