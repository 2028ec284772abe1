//! JSON API over the same session state as the HTML routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use tracing::info;

use super::extract::CurrentSession;
use crate::AppState;
use crate::auth::{AuthForm, AuthMode, User};
use crate::error::AppError;
use crate::generate::GenerationRequest;
use crate::session::Tab;

/// Response for `GET /api/session`.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub authenticated: bool,
    pub user: Option<User>,
    pub tab: Tab,
}

/// Response for `POST /api/tabs/{tab}`.
#[derive(Debug, Serialize)]
pub struct TabChange {
    pub tab: Tab,
    pub changed: bool,
}

/// GET /api/session
pub async fn session(current: CurrentSession) -> impl IntoResponse {
    let user = current.session.user();
    let view = SessionView {
        authenticated: user.is_some(),
        user,
        tab: current.session.tab(),
    };
    (current.jar, Json(view))
}

/// POST /api/auth/{mode}
pub async fn auth(
    State(state): State<AppState>,
    current: CurrentSession,
    Path(mode): Path<AuthMode>,
    Json(form): Json<AuthForm>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.auth.submit(&current.session, mode, form).await?;
    Ok((current.jar, Json(user)))
}

/// POST /api/logout
pub async fn logout(current: CurrentSession) -> impl IntoResponse {
    if current.session.is_authenticated() {
        current.session.logout();
        info!(name: "auth.logout", session_id = %current.session.id(), "User logged out");
    }
    (current.jar, StatusCode::NO_CONTENT)
}

/// POST /api/tabs/{tab}
pub async fn select_tab(
    current: CurrentSession,
    Path(tab): Path<Tab>,
) -> Result<impl IntoResponse, AppError> {
    require_user(&current)?;
    let changed = current.session.select_tab(tab);
    Ok((current.jar, Json(TabChange { tab, changed })))
}

/// POST /api/generate
pub async fn generate(
    State(state): State<AppState>,
    current: CurrentSession,
    Json(request): Json<GenerationRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_user(&current)?;
    let outcome = state.generator.trigger(&current.session, request).await?;
    Ok((current.jar, Json(outcome)))
}

fn require_user(current: &CurrentSession) -> Result<(), AppError> {
    if current.session.is_authenticated() {
        Ok(())
    } else {
        Err(AppError::Unauthenticated)
    }
}
