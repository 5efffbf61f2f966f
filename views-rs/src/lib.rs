//! views-rs: presentation layer of the analysis service
//!
//! Renders the views the service shows for scheduled Spark jobs and SSH keys.
//! Every formatter is a pure function of its input record and an explicit
//! [`SiteConfig`]; nothing here performs I/O or holds shared state.
//!
//! # Example
//!
//! ```no_run
//! use views_rs::config::SiteConfig;
//! use views_rs::jobs::ExpiryNotifier;
//! use views_rs::models::JobRecord;
//!
//! fn notify(job: &JobRecord) -> views_rs::Result<String> {
//!     let site = SiteConfig::load(None)?;
//!     let email = ExpiryNotifier::new(&site).compose(job)?;
//!     email.to_message(&site.default_from_email)
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Site configuration
//! - [`error`]: Error types and handling
//! - [`jobs`]: Spark job expiry notifications
//! - [`keys`]: SSH key detail page
//! - [`layout`]: Shared page chrome
//! - [`models`]: Input view models
//! - [`urls`]: Absolute link resolution

pub mod config;
pub mod error;
pub mod jobs;
pub mod keys;
pub mod layout;
pub mod models;
pub mod urls;
pub mod utils;

// Re-export commonly used types
pub use config::SiteConfig;
pub use error::{RenderError, Result};
