//! Simulated content generators (thumbnail, script, video).
//!
//! # Structure
//!
//! - Request and result types live here.
//! - [`script`]: the templated script text.
//! - [`media`]: placeholder media references.
//! - [`service`]: the trigger flow with the in-flight and late-completion guards.

pub mod media;
pub mod script;
pub mod service;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub use media::MediaRef;
pub use service::{GenerationService, TriggerOutcome};

/// Accepted script lengths, in minutes.
pub const SCRIPT_DURATION_RANGE: (u32, u32) = (1, 60);
/// Accepted video lengths, in seconds.
pub const VIDEO_DURATION_RANGE: (u32, u32) = (15, 300);

/// An enumerated option rendered as a `<select>`.
pub trait Choice: Copy + PartialEq + 'static {
    /// Every option in display order.
    const ALL: &'static [Self];

    /// Form value.
    fn value(self) -> &'static str;

    /// Human readable label.
    fn label(self) -> &'static str;
}

/// Which generator a request or slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    Thumbnail,
    Script,
    Video,
}

impl GeneratorKind {
    pub const ALL: [Self; 3] = [Self::Thumbnail, Self::Script, Self::Video];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnail",
            Self::Script => "script",
            Self::Video => "video",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailStyle {
    #[default]
    Modern,
    Minimalist,
    Bold,
    Professional,
    Gaming,
    Educational,
}

impl Choice for ThumbnailStyle {
    const ALL: &'static [Self] = &[
        Self::Modern,
        Self::Minimalist,
        Self::Bold,
        Self::Professional,
        Self::Gaming,
        Self::Educational,
    ];

    fn value(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Minimalist => "minimalist",
            Self::Bold => "bold",
            Self::Professional => "professional",
            Self::Gaming => "gaming",
            Self::Educational => "educational",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Modern => "Modern",
            Self::Minimalist => "Minimalist",
            Self::Bold => "Bold & Colorful",
            Self::Professional => "Professional",
            Self::Gaming => "Gaming",
            Self::Educational => "Educational",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptTone {
    #[default]
    Professional,
    Casual,
    Educational,
    Entertaining,
    Motivational,
    Storytelling,
}

impl Choice for ScriptTone {
    const ALL: &'static [Self] = &[
        Self::Professional,
        Self::Casual,
        Self::Educational,
        Self::Entertaining,
        Self::Motivational,
        Self::Storytelling,
    ];

    fn value(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Casual => "casual",
            Self::Educational => "educational",
            Self::Entertaining => "entertaining",
            Self::Motivational => "motivational",
            Self::Storytelling => "storytelling",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Casual => "Casual & Friendly",
            Self::Educational => "Educational",
            Self::Entertaining => "Entertaining",
            Self::Motivational => "Motivational",
            Self::Storytelling => "Storytelling",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoStyle {
    #[default]
    Modern,
    Cinematic,
    Animated,
    Documentary,
    Promotional,
    Educational,
    Social,
}

impl Choice for VideoStyle {
    const ALL: &'static [Self] = &[
        Self::Modern,
        Self::Cinematic,
        Self::Animated,
        Self::Documentary,
        Self::Promotional,
        Self::Educational,
        Self::Social,
    ];

    fn value(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Cinematic => "cinematic",
            Self::Animated => "animated",
            Self::Documentary => "documentary",
            Self::Promotional => "promotional",
            Self::Educational => "educational",
            Self::Social => "social",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Modern => "Modern & Clean",
            Self::Cinematic => "Cinematic",
            Self::Animated => "Animated",
            Self::Documentary => "Documentary",
            Self::Promotional => "Promotional",
            Self::Educational => "Educational",
            Self::Social => "Social Media",
        }
    }
}

/// Thumbnail generator input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailForm {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub style: ThumbnailStyle,
}

/// Script generator input. `duration` is in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptForm {
    #[serde(default)]
    pub topic: String,
    #[serde(default = "default_script_duration")]
    pub duration: u32,
    #[serde(default)]
    pub tone: ScriptTone,
}

impl Default for ScriptForm {
    fn default() -> Self {
        Self {
            topic: String::new(),
            duration: default_script_duration(),
            tone: ScriptTone::default(),
        }
    }
}

fn default_script_duration() -> u32 {
    5
}

/// Video generator input. `duration` is in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoForm {
    #[serde(default)]
    pub concept: String,
    #[serde(default = "default_video_duration")]
    pub duration: u32,
    #[serde(default)]
    pub style: VideoStyle,
}

impl Default for VideoForm {
    fn default() -> Self {
        Self {
            concept: String::new(),
            duration: default_video_duration(),
            style: VideoStyle::default(),
        }
    }
}

fn default_video_duration() -> u32 {
    30
}

/// A single generation call. Exists only while it is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GenerationRequest {
    Thumbnail(ThumbnailForm),
    Script(ScriptForm),
    Video(VideoForm),
}

impl GenerationRequest {
    #[must_use]
    pub fn kind(&self) -> GeneratorKind {
        match self {
            Self::Thumbnail(_) => GeneratorKind::Thumbnail,
            Self::Script(_) => GeneratorKind::Script,
            Self::Video(_) => GeneratorKind::Video,
        }
    }

    /// The free-text field that must be non-empty.
    #[must_use]
    pub fn prompt(&self) -> &str {
        match self {
            Self::Thumbnail(form) => &form.prompt,
            Self::Script(form) => &form.topic,
            Self::Video(form) => &form.concept,
        }
    }

    /// Duration hint in the generator's own unit, if it takes one.
    #[must_use]
    pub fn duration_hint(&self) -> Option<u32> {
        match self {
            Self::Thumbnail(_) => None,
            Self::Script(form) => Some(form.duration),
            Self::Video(form) => Some(form.duration),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prompt().trim().is_empty() {
            let field = match self {
                Self::Thumbnail(_) => "prompt",
                Self::Script(_) => "topic",
                Self::Video(_) => "concept",
            };
            return Err(ValidationError::MissingField(field));
        }
        let range = match self {
            Self::Thumbnail(_) => None,
            Self::Script(_) => Some(SCRIPT_DURATION_RANGE),
            Self::Video(_) => Some(VIDEO_DURATION_RANGE),
        };
        if let (Some((min, max)), Some(value)) = (range, self.duration_hint()) {
            if !(min..=max).contains(&value) {
                return Err(ValidationError::OutOfRange {
                    field: "duration",
                    min,
                    max,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Read a duration typed into a number input.
pub fn parse_duration(raw: &str) -> Result<u32, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingField("duration"));
    }
    raw.parse::<u32>()
        .ok()
        .ok_or(ValidationError::NotANumber("duration"))
}

/// Canned output of a generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum GenerationResult {
    Thumbnails(Vec<MediaRef>),
    Script(String),
    Videos(Vec<MediaRef>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration(" 10 "), Ok(10));
        assert_eq!(
            parse_duration(""),
            Err(ValidationError::MissingField("duration"))
        );
        assert_eq!(
            parse_duration("ten"),
            Err(ValidationError::NotANumber("duration"))
        );
        assert_eq!(
            parse_duration("-5"),
            Err(ValidationError::NotANumber("duration"))
        );
    }

    #[test]
    fn test_validate_requires_prompt() {
        let req = GenerationRequest::Thumbnail(ThumbnailForm {
            prompt: "  ".into(),
            style: ThumbnailStyle::Bold,
        });
        assert_eq!(req.validate(), Err(ValidationError::MissingField("prompt")));

        let req = GenerationRequest::Script(ScriptForm::default());
        assert_eq!(req.validate(), Err(ValidationError::MissingField("topic")));

        let req = GenerationRequest::Video(VideoForm::default());
        assert_eq!(req.validate(), Err(ValidationError::MissingField("concept")));
    }

    #[test]
    fn test_validate_duration_ranges() {
        let script = |duration| {
            GenerationRequest::Script(ScriptForm {
                topic: "Cooking".into(),
                duration,
                tone: ScriptTone::Casual,
            })
        };
        assert!(script(1).validate().is_ok());
        assert!(script(60).validate().is_ok());
        assert!(matches!(
            script(0).validate(),
            Err(ValidationError::OutOfRange { min: 1, max: 60, value: 0, .. })
        ));

        let video = GenerationRequest::Video(VideoForm {
            concept: "Launch teaser".into(),
            duration: 5,
            style: VideoStyle::Cinematic,
        });
        assert!(video.validate().is_err());
    }

    #[test]
    fn test_request_json_is_tagged_by_kind() {
        let req: GenerationRequest =
            serde_json::from_str(r#"{"kind":"script","topic":"Cooking","duration":10}"#).unwrap();
        assert_eq!(req.kind(), GeneratorKind::Script);
        assert_eq!(req.duration_hint(), Some(10));
        match req {
            GenerationRequest::Script(form) => assert_eq!(form.tone, ScriptTone::Professional),
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn test_choices_round_trip_through_serde() {
        for style in VideoStyle::ALL {
            let json = serde_json::to_string(style).unwrap();
            assert_eq!(json, format!("\"{}\"", style.value()));
        }
    }
}
