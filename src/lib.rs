//! ClipGen: a mock AI content-creation studio.
//!
//! Server-rendered landing page, simulated sign-in/sign-up, and three
//! generators (thumbnails, scripts, videos) backed by a mock content service
//! that answers with canned data after a fixed delay.
//!
//! # Architecture
//!
//! - **Server**: Axum router with cookie sessions, HTML form routes and a JSON API
//! - **Backend**: [`backend::ContentBackend`] seam; [`backend::MockBackend`] today
//! - **UI**: HTML strings + HTMX + Alpine.js
//!
//! # Modules
//!
//! - [`auth`]: auth dialog state, validation and the auth simulator
//! - [`generate`]: generator forms, canned results and the trigger flow
//! - [`session`]: per-browser session state and its store
//! - [`server`]: HTTP surface

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::implicit_hasher)]
#![allow(clippy::assigning_clones)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::unused_async)]

pub mod auth;
pub mod backend;
pub mod config;
pub mod error;
pub mod generate;
pub mod server;
pub mod session;
pub mod ui;

use std::sync::Arc;

use auth::AuthSimulator;
use backend::{ContentBackend, MockBackend};
use config::AppConfig;
use generate::GenerationService;
use session::SessionStore;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Session store, keyed by the session cookie.
    pub sessions: SessionStore,
    /// Sign-in / sign-up simulator.
    pub auth: AuthSimulator,
    /// Generator trigger flow.
    pub generator: GenerationService,
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire the simulators to `backend`.
    #[must_use]
    pub fn new(config: Arc<AppConfig>, backend: Arc<dyn ContentBackend>) -> Self {
        Self {
            sessions: SessionStore::new(),
            auth: AuthSimulator::new(Arc::clone(&backend), config.auth.enforce_password_match),
            generator: GenerationService::new(backend),
            config,
        }
    }

    /// State backed by the mock content service described by `config.mock`.
    #[must_use]
    pub fn with_mock_backend(config: Arc<AppConfig>) -> Self {
        let backend: Arc<dyn ContentBackend> = Arc::new(MockBackend::from_config(&config.mock));
        Self::new(config, backend)
    }
}
