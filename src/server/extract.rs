//! Cookie-backed session extractor.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::debug;

use crate::AppState;
use crate::session::Session;

/// Name of the cookie holding the session id.
pub const SESSION_COOKIE: &str = "clipgen_session";

/// The caller's session, created on first contact.
///
/// Handlers must return `jar` alongside their response so a freshly created
/// session's cookie reaches the browser.
#[derive(Debug)]
pub struct CurrentSession {
    pub session: Session,
    pub jar: CookieJar,
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let (session, created) = state
            .sessions
            .resolve(jar.get(SESSION_COOKIE).map(Cookie::value));

        let jar = if created {
            debug!(name: "session.created", session_id = %session.id(), "Session created");
            jar.add(session_cookie(session.id()))
        } else {
            jar
        };

        Ok(Self { session, jar })
    }
}

fn session_cookie(id: &str) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, id.to_owned()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
