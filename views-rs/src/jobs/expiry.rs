//! Expiry notification for scheduled Spark jobs

use askama::Template;
use mail_builder::MessageBuilder;
use tracing::{debug, warn};

use crate::config::SiteConfig;
use crate::error::{RenderError, Result};
use crate::models::JobRecord;
use crate::urls::absolutize;
use crate::utils::text::{format_utc, non_blank};

#[derive(Template)]
#[template(path = "jobs/expired.txt")]
struct ExpiredJobBody<'a> {
    identifier: &'a str,
    expired_date: String,
    end_date: String,
    created_at: String,
    modified_at: String,
    last_run_at: Option<String>,
    detail_url: String,
    edit_url: String,
    site_url: &'a str,
}

/// Email announcing that a job passed its end date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryEmail {
    pub subject: String,
    pub to: String,
    pub cc: String,
    pub body: String,
}

impl ExpiryEmail {
    /// Assemble an RFC 5322 message for the mail transport
    pub fn to_message(&self, from: &str) -> Result<String> {
        let message = MessageBuilder::new()
            .from(from)
            .to(self.to.as_str())
            .cc(self.cc.as_str())
            .subject(self.subject.as_str())
            .text_body(self.body.as_str())
            .write_to_string()?;

        Ok(message)
    }
}

/// Formats expiry notifications against one site configuration
pub struct ExpiryNotifier<'a> {
    site: &'a SiteConfig,
}

impl<'a> ExpiryNotifier<'a> {
    pub fn new(site: &'a SiteConfig) -> Self {
        Self { site }
    }

    /// Render the notification for an expired job.
    ///
    /// Fails without producing anything when the identifier, the creator's
    /// address, the expiry date or either link is missing, or when a link
    /// cannot be made absolute.
    pub fn compose(&self, job: &JobRecord) -> Result<ExpiryEmail> {
        let identifier = required(Some(job.identifier.as_str()), "identifier")?;
        let to = required(job.created_by.email.as_deref(), "created_by.email")?;
        let expired_date = job.expired_date.ok_or_else(|| {
            warn!(job = identifier, "Expired job has no expiry date");
            RenderError::MissingField("expired_date")
        })?;

        if !job.expiry_is_consistent() {
            warn!(
                job = identifier,
                end_date = %job.end_date,
                expired_date = %expired_date,
                "Job expired before its end date"
            );
        }

        let detail_url = absolutize(
            &self.site.site_url,
            required(job.detail_url.as_deref(), "detail_url")?,
        )?;
        let edit_url = absolutize(
            &self.site.site_url,
            required(job.edit_url.as_deref(), "edit_url")?,
        )?;

        let body = ExpiredJobBody {
            identifier,
            expired_date: format_utc(&expired_date),
            end_date: format_utc(&job.end_date),
            created_at: format_utc(&job.created_at),
            modified_at: format_utc(&job.modified_at),
            last_run_at: job.latest_run.as_ref().map(|run| format_utc(&run.scheduled_at)),
            detail_url,
            edit_url,
            site_url: &self.site.site_url,
        }
        .render()?;

        debug!(job = identifier, to, "Rendered expiry notification");

        Ok(ExpiryEmail {
            subject: format!(
                "{}Spark job {} expired",
                self.site.email_subject_prefix, identifier
            ),
            to: to.to_string(),
            cc: self.site.default_from_email.clone(),
            body,
        })
    }
}

fn required<'r>(value: Option<&'r str>, field: &'static str) -> Result<&'r str> {
    value.and_then(non_blank).ok_or_else(|| {
        warn!(field, "Expiry notification is missing a required field");
        RenderError::MissingField(field)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JobRun, UserRef};
    use chrono::{TimeZone, Utc};

    fn nightly_etl() -> JobRecord {
        JobRecord {
            identifier: "nightly-etl".to_string(),
            created_at: Utc.with_ymd_and_hms(2022, 12, 1, 9, 30, 0).unwrap(),
            modified_at: Utc.with_ymd_and_hms(2022, 12, 5, 14, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2023, 1, 10, 0, 0, 0).unwrap(),
            expired_date: Some(Utc.with_ymd_and_hms(2023, 1, 11, 0, 0, 0).unwrap()),
            created_by: UserRef {
                username: "a".to_string(),
                email: Some("a@x.com".to_string()),
                full_name: None,
            },
            latest_run: None,
            detail_url: Some("/jobs/7/".to_string()),
            edit_url: Some("/jobs/7/edit/".to_string()),
        }
    }

    #[test]
    fn test_compose_headers() {
        let site = SiteConfig::default();
        let email = ExpiryNotifier::new(&site).compose(&nightly_etl()).unwrap();

        assert_eq!(
            email.subject,
            "[Telemetry Analysis Service] Spark job nightly-etl expired"
        );
        assert_eq!(email.to, "a@x.com");
        assert_eq!(email.cc, "telemetry-alerts@mozilla.com");
    }

    #[test]
    fn test_body_without_latest_run() {
        let site = SiteConfig::default();
        let email = ExpiryNotifier::new(&site).compose(&nightly_etl()).unwrap();

        assert!(email.body.contains("Expired at: 2023-01-11 00:00:00 UTC"));
        assert!(email.body.contains("Originally set end date: 2023-01-10 00:00:00 UTC"));
        assert!(email.body.contains("Created at: 2022-12-01 09:30:00 UTC"));
        assert!(email.body.contains("Last modified at: 2022-12-05 14:00:00 UTC"));
        assert!(!email.body.to_lowercase().contains("last run"));
    }

    #[test]
    fn test_body_with_latest_run() {
        let site = SiteConfig::default();
        let mut job = nightly_etl();
        job.latest_run = Some(JobRun {
            scheduled_at: Utc.with_ymd_and_hms(2023, 1, 9, 2, 0, 0).unwrap(),
        });

        let email = ExpiryNotifier::new(&site).compose(&job).unwrap();

        assert_eq!(email.body.matches("Last run at:").count(), 1);
        assert!(email.body.contains("Last run at: 2023-01-09 02:00:00 UTC"));
        assert!(email
            .body
            .contains("Last modified at: 2022-12-05 14:00:00 UTC\nLast run at:"));
    }

    #[test]
    fn test_links_are_absolute() {
        let site = SiteConfig {
            site_url: "https://analysis.example.com".to_string(),
            ..SiteConfig::default()
        };
        let email = ExpiryNotifier::new(&site).compose(&nightly_etl()).unwrap();

        assert!(email
            .body
            .contains("Job details: https://analysis.example.com/jobs/7/"));
        assert!(email
            .body
            .contains("Change the end date or edit the job: https://analysis.example.com/jobs/7/edit/"));
        assert!(email.body.trim_end().ends_with("https://analysis.example.com"));
    }

    #[test]
    fn test_links_keep_site_path() {
        let site = SiteConfig {
            site_url: "https://host.example.com/atmo".to_string(),
            ..SiteConfig::default()
        };
        let mut job = nightly_etl();
        job.detail_url = Some("/jobs/1/".to_string());
        job.edit_url = Some("jobs/1/edit/".to_string());

        let email = ExpiryNotifier::new(&site).compose(&job).unwrap();

        assert!(email
            .body
            .contains("Job details: https://host.example.com/atmo/jobs/1/\n"));
        assert!(email
            .body
            .contains("edit the job: https://host.example.com/atmo/jobs/1/edit/"));
        assert!(email.body.trim_end().ends_with("https://host.example.com/atmo"));
    }

    #[test]
    fn test_missing_creator_email() {
        let site = SiteConfig::default();
        let mut job = nightly_etl();
        job.created_by.email = Some("  ".to_string());

        let result = ExpiryNotifier::new(&site).compose(&job);
        assert!(matches!(result, Err(RenderError::MissingField("created_by.email"))));
    }

    #[test]
    fn test_missing_identifier() {
        let site = SiteConfig::default();
        let mut job = nightly_etl();
        job.identifier.clear();

        let result = ExpiryNotifier::new(&site).compose(&job);
        assert!(matches!(result, Err(RenderError::MissingField("identifier"))));
    }

    #[test]
    fn test_missing_edit_url() {
        let site = SiteConfig::default();
        let mut job = nightly_etl();
        job.edit_url = None;

        let result = ExpiryNotifier::new(&site).compose(&job);
        assert!(matches!(result, Err(RenderError::MissingField("edit_url"))));
    }

    #[test]
    fn test_missing_expired_date() {
        let site = SiteConfig::default();
        let mut job = nightly_etl();
        job.expired_date = None;

        let result = ExpiryNotifier::new(&site).compose(&job);
        assert!(matches!(result, Err(RenderError::MissingField("expired_date"))));
    }

    #[test]
    fn test_unresolvable_link() {
        let site = SiteConfig {
            site_url: String::new(),
            ..SiteConfig::default()
        };

        let result = ExpiryNotifier::new(&site).compose(&nightly_etl());
        assert!(matches!(result, Err(RenderError::UnresolvableUrl(_))));
    }

    #[test]
    fn test_to_message() {
        let site = SiteConfig::default();
        let email = ExpiryNotifier::new(&site).compose(&nightly_etl()).unwrap();
        let message = email.to_message(&site.default_from_email).unwrap();

        assert!(message.contains("From: "));
        assert!(message.contains("To: "));
        assert!(message.contains("Cc: "));
        assert!(message.contains("a@x.com"));
        assert!(message.contains("telemetry-alerts@mozilla.com"));
        assert!(message.contains("nightly-etl"));
    }
}
