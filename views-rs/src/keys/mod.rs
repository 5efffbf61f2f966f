//! SSH key pages
//!
//! Renders the detail view of a registered key. The fragment produced here is
//! wrapped in the shared chrome by [`crate::layout::PageLayout`].

pub mod detail;
pub mod display;

pub use detail::{CsrfToken, KeyDetailView};
pub use display::{DefaultUserDisplay, UserDisplay};
