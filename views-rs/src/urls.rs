//! Resolution of routed paths into fully-qualified links

use tracing::warn;
use url::Url;

use crate::error::{RenderError, Result};

/// Make `link` absolute against `site_url`.
///
/// Links that already carry a scheme and host are returned unchanged. Anything
/// else is appended to the site URL, keeping whatever path the site is mounted
/// under. If the site URL is missing or has no host the link is rejected
/// rather than emitted relative.
pub fn absolutize(site_url: &str, link: &str) -> Result<String> {
    if let Ok(url) = Url::parse(link) {
        if url.has_host() {
            return Ok(url.into());
        }
    }

    let base = Url::parse(site_url).map_err(|e| {
        warn!(site_url, error = %e, "Site URL is not usable as a base");
        RenderError::UnresolvableUrl(format!("{} (site URL '{}': {})", link, site_url, e))
    })?;

    if base.cannot_be_a_base() || !base.has_host() {
        return Err(RenderError::UnresolvableUrl(format!(
            "{} (site URL '{}' has no host)",
            link, site_url
        )));
    }

    let prefixed = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        link.trim_start_matches('/')
    );

    let resolved = Url::parse(&prefixed)
        .map_err(|e| RenderError::UnresolvableUrl(format!("{}: {}", link, e)))?;

    Ok(resolved.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_joined_on_site_url() {
        let url = absolutize("http://localhost:8000", "/jobs/42/").unwrap();
        assert_eq!(url, "http://localhost:8000/jobs/42/");
    }

    #[test]
    fn test_absolute_link_kept() {
        let url = absolutize("http://localhost:8000", "https://other.example.com/jobs/42/").unwrap();
        assert_eq!(url, "https://other.example.com/jobs/42/");
    }

    #[test]
    fn test_site_url_path_kept() {
        let site = "https://host.example.com/atmo";
        assert_eq!(
            absolutize(site, "/jobs/1/").unwrap(),
            "https://host.example.com/atmo/jobs/1/"
        );
        assert_eq!(
            absolutize(site, "jobs/1/edit/").unwrap(),
            "https://host.example.com/atmo/jobs/1/edit/"
        );
        assert_eq!(
            absolutize("https://host.example.com/atmo/", "/jobs/1/").unwrap(),
            "https://host.example.com/atmo/jobs/1/"
        );
    }

    #[test]
    fn test_missing_site_url() {
        let result = absolutize("", "/jobs/42/");
        assert!(matches!(result, Err(RenderError::UnresolvableUrl(_))));
    }

    #[test]
    fn test_site_url_without_host() {
        let result = absolutize("mailto:ops@example.com", "/jobs/42/");
        assert!(matches!(result, Err(RenderError::UnresolvableUrl(_))));
    }
}
