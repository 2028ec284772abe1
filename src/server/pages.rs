//! HTML routes. Every POST answers `303 See Other` back to `/`.

use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tracing::info;

use super::extract::CurrentSession;
use crate::AppState;
use crate::auth::{AuthForm, AuthMode};
use crate::error::{AppError, ValidationError};
use crate::generate::{
    GenerationRequest, GeneratorKind, ScriptForm, ScriptTone, ThumbnailForm, VideoForm,
    VideoStyle, parse_duration,
};
use crate::session::Tab;
use crate::ui;

/// GET / - landing page or dashboard.
pub async fn index(current: CurrentSession) -> impl IntoResponse {
    let html = ui::render_page(&current.session.snapshot());
    (current.jar, Html(html))
}

/// GET /healthz
pub async fn healthz() -> &'static str {
    "ok"
}

/// GET /auth/{mode} - open the auth dialog.
pub async fn open_auth(current: CurrentSession, Path(mode): Path<AuthMode>) -> impl IntoResponse {
    if !current.session.is_authenticated() {
        current.session.open_auth(mode);
    }
    let html = ui::render_page(&current.session.snapshot());
    (current.jar, Html(html))
}

/// POST /auth/close
pub async fn close_auth(current: CurrentSession) -> impl IntoResponse {
    current.session.close_auth();
    (current.jar, Redirect::to("/"))
}

/// POST /auth/{mode} - run the auth simulator.
///
/// Validation errors are stored on the session and shown in the dialog.
pub async fn submit_auth(
    State(state): State<AppState>,
    current: CurrentSession,
    Path(mode): Path<AuthMode>,
    Form(form): Form<AuthForm>,
) -> Result<impl IntoResponse, AppError> {
    shown_inline(state.auth.submit(&current.session, mode, form).await)?;
    Ok((current.jar, Redirect::to("/")))
}

/// POST /logout
pub async fn logout(current: CurrentSession) -> impl IntoResponse {
    if current.session.is_authenticated() {
        current.session.logout();
        info!(name: "auth.logout", session_id = %current.session.id(), "User logged out");
    }
    (current.jar, Redirect::to("/"))
}

/// POST /tabs/{tab}
pub async fn select_tab(current: CurrentSession, Path(tab): Path<Tab>) -> impl IntoResponse {
    current.session.select_tab(tab);
    (current.jar, Redirect::to("/"))
}

/// Script form as posted by the browser; a cleared number input sends `duration=`.
#[derive(Debug, Deserialize)]
pub struct ScriptFormInput {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub tone: ScriptTone,
}

/// Video form as posted by the browser.
#[derive(Debug, Deserialize)]
pub struct VideoFormInput {
    #[serde(default)]
    pub concept: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub style: VideoStyle,
}

/// POST /generate/thumbnail
pub async fn generate_thumbnail(
    State(state): State<AppState>,
    current: CurrentSession,
    Form(form): Form<ThumbnailForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    generate(&state, current, GenerationRequest::Thumbnail(form), None).await
}

/// POST /generate/script
pub async fn generate_script(
    State(state): State<AppState>,
    current: CurrentSession,
    Form(input): Form<ScriptFormInput>,
) -> Result<(CookieJar, Redirect), AppError> {
    let (duration, error) = duration_or_default(&input.duration, ScriptForm::default().duration);
    let form = ScriptForm {
        topic: input.topic,
        duration,
        tone: input.tone,
    };
    generate(&state, current, GenerationRequest::Script(form), error).await
}

/// POST /generate/video
pub async fn generate_video(
    State(state): State<AppState>,
    current: CurrentSession,
    Form(input): Form<VideoFormInput>,
) -> Result<(CookieJar, Redirect), AppError> {
    let (duration, error) = duration_or_default(&input.duration, VideoForm::default().duration);
    let form = VideoForm {
        concept: input.concept,
        duration,
        style: input.style,
    };
    generate(&state, current, GenerationRequest::Video(form), error).await
}

fn duration_or_default(raw: &str, default: u32) -> (u32, Option<ValidationError>) {
    match parse_duration(raw) {
        Ok(duration) => (duration, None),
        Err(err) => (default, Some(err)),
    }
}

/// POST /generate/{kind}/clear
pub async fn clear_generation(
    current: CurrentSession,
    Path(kind): Path<GeneratorKind>,
) -> impl IntoResponse {
    if current.session.is_authenticated() {
        current.session.clear_generation(kind);
    }
    (current.jar, Redirect::to("/"))
}

async fn generate(
    state: &AppState,
    current: CurrentSession,
    request: GenerationRequest,
    parse_error: Option<ValidationError>,
) -> Result<(CookieJar, Redirect), AppError> {
    // Generators live behind the dashboard; signed-out posts just land on `/`.
    if current.session.is_authenticated() {
        match parse_error {
            Some(err) => current.session.reject_generation(&request, &err),
            None => shown_inline(state.generator.trigger(&current.session, request).await)?,
        }
    }
    Ok((current.jar, Redirect::to("/")))
}

/// Validation failures and abandoned sign-ins are reflected in the session
/// and shown by the next GET, so they are not errors for the HTML routes.
fn shown_inline<T>(result: Result<T, AppError>) -> Result<(), AppError> {
    match result {
        Ok(_) | Err(AppError::Validation(_) | AppError::AuthAbandoned) => Ok(()),
        Err(err) => Err(err),
    }
}
