//! Content backend capability.
//!
//! Every "network" interaction of the app goes through [`ContentBackend`].
//! The only implementation today is [`MockBackend`], which sleeps for a
//! configured delay and returns canned data. A real service can be plugged
//! in by implementing the trait and handing it to [`crate::AppState`].

mod mock;

use async_trait::async_trait;

use crate::auth::{AuthForm, AuthMode, User};
use crate::error::BackendError;
use crate::generate::{GenerationRequest, GenerationResult};

pub use mock::{MockBackend, MockDelays};

/// Trait for authentication and generation providers.
#[async_trait]
pub trait ContentBackend: Send + Sync + std::fmt::Debug {
    /// Authenticate an already validated auth form.
    async fn authenticate(&self, mode: AuthMode, form: &AuthForm) -> Result<User, BackendError>;

    /// Run an already validated generation request.
    async fn generate(&self, request: &GenerationRequest)
    -> Result<GenerationResult, BackendError>;

    /// Get the backend name for logging and debugging.
    fn backend_name(&self) -> &'static str;
}
