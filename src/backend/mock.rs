//! Fixed-delay backend returning canned data.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::ContentBackend;
use crate::auth::{self, AuthForm, AuthMode, User};
use crate::config::MockConfig;
use crate::error::BackendError;
use crate::generate::{GenerationRequest, GenerationResult, GeneratorKind, media, script};

/// Artificial latency per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockDelays {
    pub auth: Duration,
    pub thumbnail: Duration,
    pub script: Duration,
    pub video: Duration,
}

impl MockDelays {
    /// No latency at all; handy in tests.
    pub const ZERO: Self = Self {
        auth: Duration::ZERO,
        thumbnail: Duration::ZERO,
        script: Duration::ZERO,
        video: Duration::ZERO,
    };

    #[must_use]
    pub fn for_kind(&self, kind: GeneratorKind) -> Duration {
        match kind {
            GeneratorKind::Thumbnail => self.thumbnail,
            GeneratorKind::Script => self.script,
            GeneratorKind::Video => self.video,
        }
    }
}

impl Default for MockDelays {
    fn default() -> Self {
        Self {
            auth: Duration::from_millis(1000),
            thumbnail: Duration::from_millis(2000),
            script: Duration::from_millis(2000),
            video: Duration::from_millis(3000),
        }
    }
}

/// Backend that never fails.
#[derive(Debug, Clone)]
pub struct MockBackend {
    delays: MockDelays,
    placeholder_base_url: String,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(MockDelays::default(), media::DEFAULT_PLACEHOLDER_BASE_URL)
    }
}

impl MockBackend {
    #[must_use]
    pub fn new(delays: MockDelays, placeholder_base_url: impl Into<String>) -> Self {
        Self {
            delays,
            placeholder_base_url: placeholder_base_url.into(),
        }
    }

    /// Zero-latency backend with the default placeholder host.
    #[must_use]
    pub fn instant() -> Self {
        Self::new(MockDelays::ZERO, media::DEFAULT_PLACEHOLDER_BASE_URL)
    }

    #[must_use]
    pub fn from_config(config: &MockConfig) -> Self {
        Self::new(
            MockDelays {
                auth: Duration::from_millis(config.auth_delay_ms),
                thumbnail: Duration::from_millis(config.thumbnail_delay_ms),
                script: Duration::from_millis(config.script_delay_ms),
                video: Duration::from_millis(config.video_delay_ms),
            },
            config.placeholder_base_url.clone(),
        )
    }

    #[must_use]
    pub fn delays(&self) -> MockDelays {
        self.delays
    }

    async fn pause(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl ContentBackend for MockBackend {
    async fn authenticate(&self, mode: AuthMode, form: &AuthForm) -> Result<User, BackendError> {
        Self::pause(self.delays.auth).await;
        let user = auth::user_from_form(mode, form);
        debug!(mode = mode.as_str(), name = %user.name, "mock authentication accepted");
        Ok(user)
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, BackendError> {
        Self::pause(self.delays.for_kind(request.kind())).await;
        let result = match request {
            GenerationRequest::Thumbnail(_) => {
                GenerationResult::Thumbnails(media::thumbnails(&self.placeholder_base_url))
            }
            GenerationRequest::Script(form) => {
                GenerationResult::Script(script::render(&form.topic, form.duration))
            }
            GenerationRequest::Video(form) => GenerationResult::Videos(media::videos(
                &self.placeholder_base_url,
                form.duration,
                form.style,
            )),
        };
        Ok(result)
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{ScriptForm, ScriptTone, ThumbnailForm};
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_authenticate_waits_configured_delay() {
        let backend = MockBackend::default();
        let form = AuthForm {
            email: "jane@example.com".into(),
            password: "pw".into(),
            ..AuthForm::default()
        };

        let started = Instant::now();
        let user = backend.authenticate(AuthMode::SignUp, &form).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(user.name, "jane");
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_script_and_thumbnails() {
        let backend = MockBackend::default();

        let started = Instant::now();
        let result = backend
            .generate(&GenerationRequest::Script(ScriptForm {
                topic: "Cooking".into(),
                duration: 10,
                tone: ScriptTone::Educational,
            }))
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(2000));
        let GenerationResult::Script(text) = result else {
            panic!("expected a script");
        };
        assert!(text.contains("## Conclusion (8:00 - 10:00)"));

        let result = backend
            .generate(&GenerationRequest::Thumbnail(ThumbnailForm::default()))
            .await
            .unwrap();
        assert!(matches!(result, GenerationResult::Thumbnails(ref refs) if refs.len() == 4));
    }

    #[test]
    fn test_from_config() {
        let backend = MockBackend::from_config(&MockConfig {
            auth_delay_ms: 5,
            thumbnail_delay_ms: 6,
            script_delay_ms: 7,
            video_delay_ms: 8,
            placeholder_base_url: "http://img.local".into(),
        });
        assert_eq!(backend.delays().for_kind(GeneratorKind::Video), Duration::from_millis(8));
        assert_eq!(backend.backend_name(), "mock");
    }
}
