//! Per-session view state: tabs, generator slots and the render snapshot.

use serde::{Deserialize, Serialize};

use crate::auth::{AuthDialog, User};
use crate::generate::{
    GenerationRequest, GenerationResult, GeneratorKind, ScriptForm, ThumbnailForm, VideoForm,
};

/// Dashboard tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Thumbnail,
    Script,
    Video,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Overview, Self::Thumbnail, Self::Script, Self::Video];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Thumbnail => "thumbnail",
            Self::Script => "script",
            Self::Video => "video",
        }
    }

    /// Navigation label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Dashboard",
            Self::Thumbnail => "Thumbnails",
            Self::Script => "Scripts",
            Self::Video => "Videos",
        }
    }

    #[must_use]
    pub fn generator(self) -> Option<GeneratorKind> {
        match self {
            Self::Overview => None,
            Self::Thumbnail => Some(GeneratorKind::Thumbnail),
            Self::Script => Some(GeneratorKind::Script),
            Self::Video => Some(GeneratorKind::Video),
        }
    }
}

impl From<GeneratorKind> for Tab {
    fn from(kind: GeneratorKind) -> Self {
        match kind {
            GeneratorKind::Thumbnail => Self::Thumbnail,
            GeneratorKind::Script => Self::Script,
            GeneratorKind::Video => Self::Video,
        }
    }
}

/// Lifecycle of one generator instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorSlot {
    pub in_flight: bool,
    /// Bumped on teardown; completions from an older epoch are dropped.
    pub epoch: u64,
    pub result: Option<GenerationResult>,
    /// Message shown under the form after a rejected trigger.
    pub error: Option<String>,
}

impl GeneratorSlot {
    /// Drop the result and invalidate anything still in flight.
    pub fn teardown(&mut self) {
        self.epoch += 1;
        self.in_flight = false;
        self.result = None;
        self.error = None;
    }
}

/// Handle for a pending auth submission, checked on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthTicket {
    pub epoch: u64,
}

/// Handle for an in-flight generation, checked on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket {
    pub kind: GeneratorKind,
    pub epoch: u64,
}

/// Last submitted value of each generator form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forms {
    pub thumbnail: ThumbnailForm,
    pub script: ScriptForm,
    pub video: VideoForm,
}

impl Forms {
    /// Remember the fields of `request`.
    pub fn store(&mut self, request: &GenerationRequest) {
        match request {
            GenerationRequest::Thumbnail(form) => self.thumbnail = form.clone(),
            GenerationRequest::Script(form) => self.script = form.clone(),
            GenerationRequest::Video(form) => self.video = form.clone(),
        }
    }

    #[must_use]
    pub fn prompt(&self, kind: GeneratorKind) -> &str {
        match kind {
            GeneratorKind::Thumbnail => &self.thumbnail.prompt,
            GeneratorKind::Script => &self.script.topic,
            GeneratorKind::Video => &self.video.concept,
        }
    }
}

/// One slot per generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slots {
    pub thumbnail: GeneratorSlot,
    pub script: GeneratorSlot,
    pub video: GeneratorSlot,
}

impl Slots {
    #[must_use]
    pub fn get(&self, kind: GeneratorKind) -> &GeneratorSlot {
        match kind {
            GeneratorKind::Thumbnail => &self.thumbnail,
            GeneratorKind::Script => &self.script,
            GeneratorKind::Video => &self.video,
        }
    }

    pub fn get_mut(&mut self, kind: GeneratorKind) -> &mut GeneratorSlot {
        match kind {
            GeneratorKind::Thumbnail => &mut self.thumbnail,
            GeneratorKind::Script => &mut self.script,
            GeneratorKind::Video => &mut self.video,
        }
    }

    pub fn teardown_all(&mut self) {
        for kind in GeneratorKind::ALL {
            self.get_mut(kind).teardown();
        }
    }
}

/// Point-in-time copy of a session, used for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub tab: Tab,
    pub auth_dialog: AuthDialog,
    pub forms: Forms,
    pub slots: Slots,
}

impl SessionSnapshot {
    /// Whether the generate button for `kind` should be clickable.
    #[must_use]
    pub fn trigger_enabled(&self, kind: GeneratorKind) -> bool {
        !self.slots.get(kind).in_flight && !self.forms.prompt(kind).trim().is_empty()
    }
}
