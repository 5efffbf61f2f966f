use askama::Template;
use tracing::{debug, warn};

use crate::error::{RenderError, Result};
use crate::keys::display::UserDisplay;
use crate::layout::Fragment;
use crate::models::SshKeyRecord;
use crate::utils::text::{format_utc, non_blank, pluralize};

/// Anti-forgery token issued by the request layer for the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Template)]
#[template(path = "keys/detail.html")]
struct KeyDetailBody<'a> {
    fingerprint: &'a str,
    key: &'a str,
    prefix: &'a str,
    created_at: String,
    created_by: String,
    active_cluster_count: u64,
    cluster_noun: &'static str,
    raw_url: &'a str,
    delete_url: &'a str,
    csrf_token: &'a str,
}

/// Detail page of a single SSH key
pub struct KeyDetailView<'a> {
    key: &'a SshKeyRecord,
    users: &'a dyn UserDisplay,
    csrf_token: CsrfToken,
}

impl<'a> KeyDetailView<'a> {
    pub fn new(key: &'a SshKeyRecord, users: &'a dyn UserDisplay, csrf_token: CsrfToken) -> Self {
        Self {
            key,
            users,
            csrf_token,
        }
    }

    /// Render the page fragment.
    ///
    /// Fails when the fingerprint, the raw or delete link, or the
    /// anti-forgery token is missing.
    pub fn render(&self) -> Result<Fragment> {
        let key = self.key;

        let fingerprint = required(Some(key.fingerprint.as_str()), "fingerprint")?;
        let raw_url = required(key.raw_url.as_deref(), "raw_url")?;
        let delete_url = required(key.delete_url.as_deref(), "delete_url")?;
        let csrf_token = required(Some(self.csrf_token.as_str()), "csrf_token")?;

        let body = KeyDetailBody {
            fingerprint,
            key: key.key.trim(),
            prefix: &key.prefix,
            created_at: format_utc(&key.created_at),
            created_by: self.users.display_name(&key.created_by),
            active_cluster_count: key.active_cluster_count,
            cluster_noun: pluralize(key.active_cluster_count, "cluster", "clusters"),
            raw_url,
            delete_url,
            csrf_token,
        }
        .render()?;

        debug!(fingerprint, "Rendered SSH key detail");

        Ok(Fragment {
            title: format!("SSH key {}", key),
            body,
        })
    }
}

fn required<'r>(value: Option<&'r str>, field: &'static str) -> Result<&'r str> {
    value.and_then(non_blank).ok_or_else(|| {
        warn!(field, "SSH key detail is missing a required field");
        RenderError::MissingField(field)
    })
}
