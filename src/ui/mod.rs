//! Server-rendered views.
//!
//! Every page is a plain HTML string wrapped in [`shell::html_shell`]. Forms
//! post back to the server and are progressively enhanced with htmx
//! (`hx-boost`) and Alpine.js for client-side enable/disable of triggers.
//!
//! # Structure
//!
//! - [`landing`]: marketing page and auth dialog
//! - [`dashboard`]: signed-in shell, tab navigation and overview
//! - [`generators`]: thumbnail, script and video panels
//! - [`components`]: reusable markup pieces

pub mod components;
pub mod dashboard;
pub mod generators;
pub mod landing;
pub mod shell;

use crate::session::SessionSnapshot;

/// Render the page for a session: landing when signed out, else the dashboard.
#[must_use]
pub fn render_page(snapshot: &SessionSnapshot) -> String {
    match &snapshot.user {
        Some(user) => shell::html_shell("Dashboard", &dashboard::render(user, snapshot)),
        None => shell::html_shell("Create Amazing Content", &landing::render(&snapshot.auth_dialog)),
    }
}

/// Escape text for use in HTML bodies and quoted attributes.
#[must_use]
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
