//! Site configuration for views-rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{RenderError, Result};
use crate::utils::email::validate_email;

/// Environment variable prefix for overrides (e.g. `VIEWS_SITE_URL`)
const ENV_PREFIX: &str = "VIEWS";

/// Site-wide settings consumed by the formatters
///
/// Passed explicitly to every formatter; there is no process-wide instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Prepended to every outgoing subject line
    #[serde(default = "default_subject_prefix")]
    pub email_subject_prefix: String,
    /// Sender address, also copied on notifications
    #[serde(default = "default_from_email")]
    pub default_from_email: String,
    /// Base for fully-qualified links (e.g. "https://analysis.example.com")
    #[serde(default = "default_site_url")]
    pub site_url: String,
}

fn default_subject_prefix() -> String {
    "[Telemetry Analysis Service] ".to_string()
}

fn default_from_email() -> String {
    "telemetry-alerts@mozilla.com".to_string()
}

fn default_site_url() -> String {
    "http://localhost:8000".to_string()
}

impl SiteConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RenderError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| RenderError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Layer defaults, an optional TOML file and `VIEWS_*` environment
    /// variables, then validate the result.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, config::Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("email_subject_prefix", defaults.email_subject_prefix)
            .and_then(|b| b.set_default("default_from_email", defaults.default_from_email))
            .and_then(|b| b.set_default("site_url", defaults.site_url))
            .map_err(|e| RenderError::Config(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path).format(config::FileFormat::Toml),
            );
        }

        let settings = builder
            .add_source(environment)
            .build()
            .map_err(|e| RenderError::Config(format!("Failed to load config: {}", e)))?;

        let site: SiteConfig = settings
            .try_deserialize()
            .map_err(|e| RenderError::Config(format!("Failed to parse config: {}", e)))?;

        site.validate()?;
        Ok(site)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let base = url::Url::parse(&self.site_url).map_err(|e| {
            RenderError::Config(format!("Invalid site URL '{}': {}", self.site_url, e))
        })?;

        if !matches!(base.scheme(), "http" | "https") || !base.has_host() {
            return Err(RenderError::Config(format!(
                "Site URL must be an http(s) URL with a host: '{}'",
                self.site_url
            )));
        }

        validate_email(&self.default_from_email)
            .map_err(|e| RenderError::Config(format!("Invalid default sender: {}", e)))?;

        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            email_subject_prefix: default_subject_prefix(),
            default_from_email: default_from_email(),
            site_url: default_site_url(),
        }
    }
}
