//! Read-only view models handed over by the persistence layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    /// Login name
    pub username: String,
    /// Primary email address, if the account has one
    #[serde(default)]
    pub email: Option<String>,
    /// Full name as entered in the profile
    #[serde(default)]
    pub full_name: Option<String>,
}

/// A single scheduled execution of a Spark job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRun {
    /// When the run was scheduled
    pub scheduled_at: DateTime<Utc>,
}

/// Scheduled Spark job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    /// Job name
    pub identifier: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub modified_at: DateTime<Utc>,
    /// Date the job was meant to stop running
    pub end_date: DateTime<Utc>,
    /// Date the job was actually marked expired
    #[serde(default)]
    pub expired_date: Option<DateTime<Utc>>,
    /// Owner of the job
    pub created_by: UserRef,
    /// Most recent run, absent when the job never ran
    #[serde(default)]
    pub latest_run: Option<JobRun>,
    /// Detail page link, relative or absolute
    #[serde(default)]
    pub detail_url: Option<String>,
    /// Edit page link, relative or absolute
    #[serde(default)]
    pub edit_url: Option<String>,
}

impl JobRecord {
    /// Whether the expiry date respects the intended end date
    pub fn expiry_is_consistent(&self) -> bool {
        self.expired_date.map_or(true, |expired| expired >= self.end_date)
    }
}

/// SSH public key registered by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SshKeyRecord {
    /// User-chosen name of the key
    #[serde(default)]
    pub title: String,
    /// Key fingerprint, e.g. "50:d2:2a:..."
    pub fingerprint: String,
    /// Public key material as stored
    pub key: String,
    /// Key type prefix, e.g. "ssh-rsa"
    pub prefix: String,
    /// Upload timestamp
    pub created_at: DateTime<Utc>,
    /// Uploader
    pub created_by: UserRef,
    /// Link serving the raw key
    #[serde(default)]
    pub raw_url: Option<String>,
    /// Link the delete form posts to
    #[serde(default)]
    pub delete_url: Option<String>,
    /// Active launched clusters currently using the key
    #[serde(default)]
    pub active_cluster_count: u64,
}

impl fmt::Display for SshKeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.title.trim() {
            "" => f.write_str(&self.fingerprint),
            title => f.write_str(title),
        }
    }
}
