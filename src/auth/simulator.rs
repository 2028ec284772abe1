//! Auth dialog submission flow.

use std::sync::Arc;

use tracing::info;

use super::{AuthForm, AuthMode, User};
use crate::backend::ContentBackend;
use crate::error::AppError;
use crate::session::Session;

/// Runs an auth submission against the backend and updates the session.
#[derive(Debug, Clone)]
pub struct AuthSimulator {
    backend: Arc<dyn ContentBackend>,
    enforce_password_match: bool,
}

impl AuthSimulator {
    #[must_use]
    pub fn new(backend: Arc<dyn ContentBackend>, enforce_password_match: bool) -> Self {
        Self {
            backend,
            enforce_password_match,
        }
    }

    /// Validate, wait for the backend, then sign the session in.
    ///
    /// On validation failure the session's dialog stays open with the error.
    /// If the dialog is opened, closed or reset while the backend is working,
    /// the result is dropped and [`AppError::AuthAbandoned`] is returned.
    pub async fn submit(
        &self,
        session: &Session,
        mode: AuthMode,
        form: AuthForm,
    ) -> Result<User, AppError> {
        if let Err(err) = super::validate(mode, &form, self.enforce_password_match) {
            info!(
                name: "auth.rejected",
                session_id = %session.id(),
                mode = mode.as_str(),
                reason = %err,
                "Auth submission rejected"
            );
            session.reject_auth(mode, &form, err.clone());
            return Err(err.into());
        }

        let ticket = session.begin_auth();
        let user = self.backend.authenticate(mode, &form).await?;

        if session.finish_auth(ticket, user.clone()) {
            info!(
                name: "auth.simulated",
                session_id = %session.id(),
                mode = mode.as_str(),
                backend = self.backend.backend_name(),
                user = %user.name,
                "Mock user signed in"
            );
            Ok(user)
        } else {
            info!(
                name: "auth.discarded",
                session_id = %session.id(),
                mode = mode.as_str(),
                "Auth dialog dismissed before auth completed"
            );
            Err(AppError::AuthAbandoned)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use crate::error::ValidationError;
    use crate::session::SessionStore;

    fn simulator(enforce: bool) -> AuthSimulator {
        AuthSimulator::new(Arc::new(MockBackend::instant()), enforce)
    }

    #[tokio::test]
    async fn test_signup_with_empty_name() {
        let session = SessionStore::new().create();
        session.open_auth(AuthMode::SignUp);

        let user = simulator(false)
            .submit(
                &session,
                AuthMode::SignUp,
                AuthForm {
                    email: "jane@example.com".into(),
                    password: "pw".into(),
                    confirm_password: "different".into(),
                    ..AuthForm::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(user.name, "jane");
        let snapshot = session.snapshot();
        assert_eq!(snapshot.user, Some(user));
        assert!(!snapshot.auth_dialog.open);
        assert!(snapshot.auth_dialog.form.is_empty());
    }

    #[tokio::test]
    async fn test_mismatch_rejected_when_enforced() {
        let session = SessionStore::new().create();
        session.open_auth(AuthMode::SignUp);

        let err = simulator(true)
            .submit(
                &session,
                AuthMode::SignUp,
                AuthForm {
                    name: "Jane".into(),
                    email: "jane@example.com".into(),
                    password: "pw".into(),
                    confirm_password: "different".into(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(ValidationError::PasswordMismatch)
        ));
        let snapshot = session.snapshot();
        assert!(snapshot.user.is_none());
        assert!(snapshot.auth_dialog.open);
        assert_eq!(snapshot.auth_dialog.form.name, "Jane");
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_after_session_removed_is_ignored() {
        let store = SessionStore::new();
        let session = store.create();
        let sim = AuthSimulator::new(Arc::new(MockBackend::default()), false);

        let pending = {
            let session = session.clone();
            tokio::spawn(async move {
                sim.submit(
                    &session,
                    AuthMode::SignIn,
                    AuthForm {
                        email: "kim@x.io".into(),
                        password: "pw".into(),
                        ..AuthForm::default()
                    },
                )
                .await
            })
        };
        tokio::task::yield_now().await;
        store.remove(session.id());

        let err = pending.await.unwrap().unwrap_err();
        assert!(matches!(err, AppError::AuthAbandoned));
        assert!(!session.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_closing_dialog_discards_pending_sign_up() {
        let session = SessionStore::new().create();
        session.open_auth(AuthMode::SignUp);
        let sim = AuthSimulator::new(Arc::new(MockBackend::default()), false);

        let pending = {
            let session = session.clone();
            tokio::spawn(async move {
                sim.submit(
                    &session,
                    AuthMode::SignUp,
                    AuthForm {
                        email: "jane@example.com".into(),
                        password: "pw".into(),
                        confirm_password: "pw".into(),
                        ..AuthForm::default()
                    },
                )
                .await
            })
        };
        tokio::task::yield_now().await;
        session.close_auth();

        let err = pending.await.unwrap().unwrap_err();
        assert!(matches!(err, AppError::AuthAbandoned));
        let snapshot = session.snapshot();
        assert!(snapshot.user.is_none());
        assert!(!snapshot.auth_dialog.open);
    }
}
