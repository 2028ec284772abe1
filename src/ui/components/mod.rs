//! Reusable markup pieces, styled after shadcn/ui.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants
//! - [`card`], [`feature_card`]: Card containers
//! - [`Input`], [`textarea`], [`select`]: Labelled form fields
//! - [`icons`]: Inline SVG icons

mod button;
mod card;
pub mod icons;
mod input;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{card, feature_card};
pub use input::{Input, select, textarea};
