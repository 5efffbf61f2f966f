//! Notifications about scheduled Spark jobs

pub mod expiry;

pub use expiry::{ExpiryEmail, ExpiryNotifier};
