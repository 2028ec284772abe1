//! Session and navigation state.
//!
//! Each browser gets a [`Session`] keyed by an opaque cookie. A session
//! holds the mock user (if signed in), the active dashboard tab, the auth
//! dialog and one slot per generator. Nothing is persisted; restarting the
//! server forgets everything.
//!
//! # Example
//!
//! ```rust
//! use clipgen::auth::User;
//! use clipgen::session::{SessionStore, Tab};
//!
//! let store = SessionStore::new();
//! let session = store.create();
//! session.sign_in(User { name: "jane".into(), email: "jane@example.com".into() });
//!
//! assert!(session.select_tab(Tab::Script));
//! assert!(!session.select_tab(Tab::Script));
//! ```

mod store;
mod view_state;

pub use store::{DEFAULT_SESSION_TIMEOUT, Session, SessionStore};
pub use view_state::{
    AuthTicket, Forms, GenerationTicket, GeneratorSlot, SessionSnapshot, Slots, Tab,
};
