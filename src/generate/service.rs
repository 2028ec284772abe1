//! Trigger flow shared by the three generators.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::{GenerationRequest, GenerationResult};
use crate::backend::ContentBackend;
use crate::error::AppError;
use crate::session::{GenerationTicket, Session};

/// What happened to a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "lowercase")]
pub enum TriggerOutcome {
    /// The backend answered and the session now shows the result.
    Completed(GenerationResult),
    /// A request for this generator was already in flight; nothing happened.
    Ignored,
    /// The generator was torn down before the backend answered.
    Discarded,
}

/// Runs generation requests against the backend on behalf of a session.
#[derive(Debug, Clone)]
pub struct GenerationService {
    backend: Arc<dyn ContentBackend>,
}

impl GenerationService {
    #[must_use]
    pub fn new(backend: Arc<dyn ContentBackend>) -> Self {
        Self { backend }
    }

    /// Trigger a generator.
    ///
    /// A trigger while the same generator is in flight is a no-op. Input is
    /// validated before anything is marked in flight.
    pub async fn trigger(
        &self,
        session: &Session,
        request: GenerationRequest,
    ) -> Result<TriggerOutcome, AppError> {
        let kind = request.kind();

        if session.is_generating(kind) {
            return Ok(Self::ignored(session, &request));
        }

        if let Err(err) = request.validate() {
            session.reject_generation(&request, &err);
            return Err(err.into());
        }

        let Some(ticket) = session.begin_generation(&request) else {
            return Ok(Self::ignored(session, &request));
        };

        info!(
            name: "generation.started",
            session_id = %session.id(),
            generator = kind.as_str(),
            backend = self.backend.backend_name(),
            duration_hint = ?request.duration_hint(),
            "Generation started"
        );

        let mut in_flight = InFlight {
            session,
            ticket: Some(ticket),
        };
        let outcome = self.backend.generate(&request).await;
        in_flight.ticket = None;

        if !session.finish_generation(ticket, outcome.clone()) {
            info!(
                name: "generation.discarded",
                session_id = %session.id(),
                generator = kind.as_str(),
                "Generator torn down before completion; result dropped"
            );
            return Ok(TriggerOutcome::Discarded);
        }

        let result = outcome?;
        info!(
            name: "generation.completed",
            session_id = %session.id(),
            generator = kind.as_str(),
            "Generation completed"
        );
        Ok(TriggerOutcome::Completed(result))
    }

    fn ignored(session: &Session, request: &GenerationRequest) -> TriggerOutcome {
        info!(
            name: "generation.ignored",
            session_id = %session.id(),
            generator = request.kind().as_str(),
            "Generator busy; trigger ignored"
        );
        TriggerOutcome::Ignored
    }
}

/// Releases the slot if the trigger future is dropped mid-flight, e.g. when
/// the client disconnects or the request times out.
#[derive(Debug)]
struct InFlight<'a> {
    session: &'a Session,
    ticket: Option<GenerationTicket>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let Some(ticket) = self.ticket.take() else {
            return;
        };
        if self.session.abandon_generation(ticket) {
            info!(
                name: "generation.cancelled",
                session_id = %self.session.id(),
                generator = ticket.kind.as_str(),
                "Trigger dropped before completion; slot released"
            );
        }
    }
}
