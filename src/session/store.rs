//! Browser sessions and their in-memory store.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use super::view_state::{AuthTicket, Forms, GenerationTicket, SessionSnapshot, Slots, Tab};
use crate::auth::{AuthDialog, AuthForm, AuthMode, User};
use crate::error::{BackendError, ValidationError};
use crate::generate::{GenerationRequest, GenerationResult, GeneratorKind};

/// Default session timeout (30 minutes).
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// A single browser session.
///
/// Cloning is cheap; clones share state.
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    id: String,
    state: RwLock<SessionData>,
}

#[derive(Debug)]
struct SessionData {
    user: Option<User>,
    tab: Tab,
    auth_dialog: AuthDialog,
    /// Bumped whenever the auth dialog is opened, closed or reset.
    auth_epoch: u64,
    forms: Forms,
    slots: Slots,
    last_activity: DateTime<Utc>,
    /// Set once the store has dropped this session.
    closed: bool,
}

impl Session {
    fn new(id: String) -> Self {
        let now = Utc::now();
        Self {
            inner: Arc::new(SessionInner {
                id,
                state: RwLock::new(SessionData {
                    user: None,
                    tab: Tab::default(),
                    auth_dialog: AuthDialog::default(),
                    auth_epoch: 0,
                    forms: Forms::default(),
                    slots: Slots::default(),
                    last_activity: now,
                    closed: false,
                }),
            }),
        }
    }

    /// Get the session ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.inner.state.read().user.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.state.read().user.is_some()
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.inner.state.read().tab
    }

    /// Record activity without changing any state.
    pub fn touch(&self) {
        self.inner.state.write().last_activity = Utc::now();
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let guard = self.inner.state.read();
        SessionSnapshot {
            user: guard.user.clone(),
            tab: guard.tab,
            auth_dialog: guard.auth_dialog.clone(),
            forms: guard.forms.clone(),
            slots: guard.slots.clone(),
        }
    }

    // ── Auth ────────────────────────────────────────────────────────────────

    pub fn open_auth(&self, mode: AuthMode) {
        let mut guard = self.inner.state.write();
        guard.auth_dialog.open(mode);
        guard.auth_epoch += 1;
        guard.last_activity = Utc::now();
    }

    pub fn close_auth(&self) {
        let mut guard = self.inner.state.write();
        guard.auth_dialog.close();
        guard.auth_epoch += 1;
        guard.last_activity = Utc::now();
    }

    /// Keep the dialog open with the rejected input and its error.
    pub fn reject_auth(&self, mode: AuthMode, form: &AuthForm, error: ValidationError) {
        let mut guard = self.inner.state.write();
        guard.auth_dialog = AuthDialog {
            open: true,
            mode,
            form: form.without_secrets(),
            error: Some(error),
        };
        guard.last_activity = Utc::now();
    }

    /// Ticket for an auth submission about to wait on the backend.
    #[must_use]
    pub fn begin_auth(&self) -> AuthTicket {
        AuthTicket {
            epoch: self.inner.state.read().auth_epoch,
        }
    }

    /// Sign in as `user` if the dialog has not been opened, closed or reset
    /// since `ticket` was taken.
    ///
    /// Returns `false` (and does nothing) for a stale ticket or a dropped session.
    pub fn finish_auth(&self, ticket: AuthTicket, user: User) -> bool {
        let mut guard = self.inner.state.write();
        if guard.auth_epoch != ticket.epoch {
            return false;
        }
        Self::apply_sign_in(&mut guard, user)
    }

    /// Become authenticated as `user`: the dialog resets and closes.
    ///
    /// Returns `false` (and does nothing) if the session was already dropped.
    pub fn sign_in(&self, user: User) -> bool {
        Self::apply_sign_in(&mut self.inner.state.write(), user)
    }

    fn apply_sign_in(data: &mut SessionData, user: User) -> bool {
        if data.closed {
            return false;
        }
        data.user = Some(user);
        data.tab = Tab::Overview;
        data.auth_dialog.close();
        data.auth_epoch += 1;
        data.last_activity = Utc::now();
        true
    }

    /// Drop the user and tear down every generator.
    pub fn logout(&self) {
        let mut guard = self.inner.state.write();
        guard.user = None;
        guard.tab = Tab::Overview;
        guard.auth_dialog.close();
        guard.auth_epoch += 1;
        guard.forms = Forms::default();
        guard.slots.teardown_all();
        guard.last_activity = Utc::now();
    }

    // ── Navigation ──────────────────────────────────────────────────────────

    /// Switch tabs. Returns `true` if the active tab changed.
    ///
    /// Ignored while signed out.
    pub fn select_tab(&self, tab: Tab) -> bool {
        let mut guard = self.inner.state.write();
        guard.last_activity = Utc::now();
        if guard.user.is_none() || guard.tab == tab {
            return false;
        }
        guard.tab = tab;
        true
    }

    // ── Generators ──────────────────────────────────────────────────────────

    #[must_use]
    pub fn is_generating(&self, kind: GeneratorKind) -> bool {
        self.inner.state.read().slots.get(kind).in_flight
    }

    /// Mark the generator for `request` as in flight.
    ///
    /// Returns `None` if a request is already in flight for that generator;
    /// in that case nothing about the session changes.
    pub fn begin_generation(&self, request: &GenerationRequest) -> Option<GenerationTicket> {
        let kind = request.kind();
        let mut guard = self.inner.state.write();
        if guard.closed || guard.slots.get(kind).in_flight {
            return None;
        }
        guard.forms.store(request);
        guard.last_activity = Utc::now();
        let slot = guard.slots.get_mut(kind);
        slot.in_flight = true;
        slot.error = None;
        Some(GenerationTicket {
            kind,
            epoch: slot.epoch,
        })
    }

    /// Record a rejected trigger; the slot stays idle.
    pub fn reject_generation(&self, request: &GenerationRequest, error: &ValidationError) {
        let mut guard = self.inner.state.write();
        if guard.slots.get(request.kind()).in_flight {
            return;
        }
        guard.forms.store(request);
        guard.slots.get_mut(request.kind()).error = Some(error.to_string());
        guard.last_activity = Utc::now();
    }

    /// Apply a completion. Returns `false` if the ticket is stale and the
    /// outcome was discarded.
    pub fn finish_generation(
        &self,
        ticket: GenerationTicket,
        outcome: Result<GenerationResult, BackendError>,
    ) -> bool {
        let mut guard = self.inner.state.write();
        if guard.closed {
            return false;
        }
        let slot = guard.slots.get_mut(ticket.kind);
        if slot.epoch != ticket.epoch || !slot.in_flight {
            return false;
        }
        slot.in_flight = false;
        match outcome {
            Ok(result) => {
                slot.result = Some(result);
                slot.error = None;
            }
            Err(err) => slot.error = Some(err.to_string()),
        }
        guard.last_activity = Utc::now();
        true
    }

    /// Release a slot whose trigger went away before the backend answered.
    ///
    /// Returns `false` if the slot has since been torn down or completed.
    pub fn abandon_generation(&self, ticket: GenerationTicket) -> bool {
        let mut guard = self.inner.state.write();
        let slot = guard.slots.get_mut(ticket.kind);
        if slot.epoch != ticket.epoch || !slot.in_flight {
            return false;
        }
        slot.in_flight = false;
        true
    }

    /// Drop a generator's result, abandoning anything in flight.
    pub fn clear_generation(&self, kind: GeneratorKind) {
        let mut guard = self.inner.state.write();
        guard.slots.get_mut(kind).teardown();
        guard.last_activity = Utc::now();
    }

    // ── Lifetime ────────────────────────────────────────────────────────────

    /// Tear the session down for good. Late completions are ignored.
    fn close(&self) {
        let mut guard = self.inner.state.write();
        guard.closed = true;
        guard.auth_epoch += 1;
        guard.slots.teardown_all();
    }

    /// Check if the session has been idle longer than `timeout`.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        let last = self.inner.state.read().last_activity;
        // A negative span means clock skew; treat as fresh.
        (Utc::now() - last)
            .to_std()
            .is_ok_and(|idle| idle > timeout)
    }
}

/// Thread-safe store for sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    /// Create a new session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new session and return it.
    #[must_use]
    pub fn create(&self) -> Session {
        let session = Session::new(Uuid::new_v4().to_string());
        self.inner
            .write()
            .insert(session.id().to_string(), session.clone());
        session
    }

    /// Get a session by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Session> {
        self.inner.read().get(id).cloned()
    }

    /// Look up `id`, or start a fresh session if it is unknown or absent.
    ///
    /// A found session counts as active. The flag is `true` when a new
    /// session was created.
    #[must_use]
    pub fn resolve(&self, id: Option<&str>) -> (Session, bool) {
        match id.and_then(|id| self.get(id)) {
            Some(session) => {
                session.touch();
                (session, false)
            }
            None => (self.create(), true),
        }
    }

    /// Remove a session by ID.
    pub fn remove(&self, id: &str) -> Option<Session> {
        let removed = self.inner.write().remove(id);
        if let Some(session) = &removed {
            session.close();
        }
        removed
    }

    /// Get the number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if there are no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove sessions that have been inactive longer than the timeout.
    ///
    /// Returns the number of sessions removed.
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let mut guard = self.inner.write();
        let before = guard.len();
        guard.retain(|_, session| {
            let expired = session.is_expired_with_timeout(timeout);
            if expired {
                session.close();
            }
            !expired
        });
        before - guard.len()
    }

    /// Sweep expired sessions every `interval` until the task is aborted.
    pub fn spawn_sweeper(&self, timeout: Duration, interval: Duration) -> tokio::task::JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let removed = store.cleanup_expired_with_timeout(timeout);
                if removed > 0 {
                    tracing::info!(
                        name: "session.expired",
                        removed,
                        remaining = store.len(),
                        "Expired idle sessions"
                    );
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{ScriptForm, ThumbnailForm};

    fn jane() -> User {
        User {
            name: "jane".into(),
            email: "jane@example.com".into(),
        }
    }

    fn thumbnail_request() -> GenerationRequest {
        GenerationRequest::Thumbnail(ThumbnailForm {
            prompt: "bright coding tutorial".into(),
            ..ThumbnailForm::default()
        })
    }

    #[test]
    fn test_session_store() {
        let store = SessionStore::new();
        assert!(store.is_empty());

        let session = store.create();
        assert_eq!(store.len(), 1);

        let retrieved = store.get(session.id()).unwrap();
        assert_eq!(retrieved.id(), session.id());

        let (same, created) = store.resolve(Some(session.id()));
        assert!(!created);
        assert_eq!(same.id(), session.id());

        let (_, created) = store.resolve(Some("unknown"));
        assert!(created);
        assert_eq!(store.len(), 2);

        store.remove(session.id());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sign_in_resets_dialog() {
        let session = SessionStore::new().create();
        session.open_auth(AuthMode::SignUp);
        session.reject_auth(
            AuthMode::SignUp,
            &AuthForm {
                email: "jane@example.com".into(),
                password: "secret".into(),
                ..AuthForm::default()
            },
            ValidationError::PasswordMismatch,
        );
        let dialog = session.snapshot().auth_dialog;
        assert!(dialog.open);
        assert_eq!(dialog.form.email, "jane@example.com");
        assert!(dialog.form.password.is_empty());

        assert!(session.sign_in(jane()));
        let snapshot = session.snapshot();
        assert!(!snapshot.auth_dialog.open);
        assert!(snapshot.auth_dialog.form.is_empty());
        assert!(snapshot.auth_dialog.error.is_none());
        assert_eq!(snapshot.user, Some(jane()));
    }

    #[test]
    fn test_select_tab_is_idempotent() {
        let session = SessionStore::new().create();
        assert!(!session.select_tab(Tab::Script), "signed-out selection is ignored");
        assert_eq!(session.tab(), Tab::Overview);

        session.sign_in(jane());
        assert!(session.select_tab(Tab::Script));
        let before = session.snapshot();
        assert!(!session.select_tab(Tab::Script));
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_second_begin_is_rejected_while_in_flight() {
        let session = SessionStore::new().create();
        let request = thumbnail_request();

        let ticket = session.begin_generation(&request).unwrap();
        assert!(session.begin_generation(&request).is_none());

        // Other generators are independent.
        let script = GenerationRequest::Script(ScriptForm {
            topic: "Cooking".into(),
            ..ScriptForm::default()
        });
        assert!(session.begin_generation(&script).is_some());

        assert!(session.finish_generation(ticket, Ok(GenerationResult::Thumbnails(vec![]))));
        assert!(session.begin_generation(&request).is_some());
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let session = SessionStore::new().create();
        session.sign_in(jane());

        let ticket = session.begin_generation(&thumbnail_request()).unwrap();
        session.clear_generation(GeneratorKind::Thumbnail);
        assert!(!session.finish_generation(ticket, Ok(GenerationResult::Thumbnails(vec![]))));
        assert!(session.snapshot().slots.thumbnail.result.is_none());

        let ticket = session.begin_generation(&thumbnail_request()).unwrap();
        session.logout();
        assert!(!session.finish_generation(ticket, Ok(GenerationResult::Thumbnails(vec![]))));
        let snapshot = session.snapshot();
        assert!(snapshot.slots.thumbnail.result.is_none());
        assert!(snapshot.forms.thumbnail.prompt.is_empty());
    }

    #[test]
    fn test_removed_session_ignores_completion() {
        let store = SessionStore::new();
        let session = store.create();
        let ticket = session.begin_generation(&thumbnail_request()).unwrap();
        store.remove(session.id());
        assert!(!session.finish_generation(ticket, Ok(GenerationResult::Thumbnails(vec![]))));
    }

    #[test]
    fn test_abandon_releases_only_current_ticket() {
        let session = SessionStore::new().create();

        let ticket = session.begin_generation(&thumbnail_request()).unwrap();
        assert!(session.abandon_generation(ticket));
        assert!(!session.is_generating(GeneratorKind::Thumbnail));
        assert!(!session.abandon_generation(ticket));

        let stale = session.begin_generation(&thumbnail_request()).unwrap();
        session.clear_generation(GeneratorKind::Thumbnail);
        let current = session.begin_generation(&thumbnail_request()).unwrap();
        assert!(!session.abandon_generation(stale));
        assert!(session.is_generating(GeneratorKind::Thumbnail));
        assert!(session.finish_generation(current, Ok(GenerationResult::Thumbnails(vec![]))));
    }

    #[test]
    fn test_dismissed_dialog_rejects_pending_auth() {
        let session = SessionStore::new().create();
        session.open_auth(AuthMode::SignUp);

        let ticket = session.begin_auth();
        session.close_auth();
        assert!(!session.finish_auth(ticket, jane()));
        assert!(!session.is_authenticated());

        session.open_auth(AuthMode::SignIn);
        let ticket = session.begin_auth();
        assert!(session.finish_auth(ticket, jane()));
        assert_eq!(session.user(), Some(jane()));
    }

    #[test]
    fn test_resolve_refreshes_activity() {
        let store = SessionStore::new();
        let session = store.create();
        std::thread::sleep(Duration::from_millis(30));

        let (same, created) = store.resolve(Some(session.id()));
        assert!(!created);
        assert_eq!(same.id(), session.id());
        assert_eq!(store.cleanup_expired_with_timeout(Duration::from_millis(20)), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_cleanup_expired() {
        let store = SessionStore::new();
        let _ = store.create();
        assert_eq!(store.cleanup_expired_with_timeout(DEFAULT_SESSION_TIMEOUT), 0);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(store.cleanup_expired_with_timeout(Duration::from_millis(5)), 1);
        assert!(store.is_empty());
    }
}
