//! Shared page chrome
//!
//! Views render a [`Fragment`]; [`PageLayout`] composes it into a full
//! document. Composition replaces template inheritance.

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::error::Result;

/// Rendered view content plus the title it wants in the page chrome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub title: String,
    pub body: String,
}

#[derive(Template)]
#[template(path = "layout.html")]
struct LayoutTemplate<'a> {
    site_name: &'a str,
    title: &'a str,
    content: &'a str,
}

/// Full HTML document ready to be served
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage(pub String);

impl RenderedPage {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl IntoResponse for RenderedPage {
    fn into_response(self) -> Response {
        Html(self.0).into_response()
    }
}

/// Wraps fragments in the site's navigation and head tags
#[derive(Debug, Clone)]
pub struct PageLayout {
    site_name: String,
}

impl PageLayout {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
        }
    }

    pub fn compose(&self, fragment: &Fragment) -> Result<RenderedPage> {
        let html = LayoutTemplate {
            site_name: &self.site_name,
            title: &fragment.title,
            content: &fragment.body,
        }
        .render()?;

        Ok(RenderedPage(html))
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::new("Telemetry Analysis Service")
    }
}
