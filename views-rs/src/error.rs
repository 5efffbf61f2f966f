//! Error types for views-rs

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Rendering error types
///
/// None of these are recovered locally: a failed render produces no output and
/// the caller decides whether to skip, log or alert.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A required attribute of the input record is absent or blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A relative link could not be turned into a fully-qualified URL
    #[error("Cannot resolve absolute URL: {0}")]
    UnresolvableUrl(String),

    /// Malformed email address
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Template engine error
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Mail message assembly error
    #[error("Message assembly error: {0}")]
    Message(#[from] std::io::Error),
}
