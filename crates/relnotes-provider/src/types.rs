//! Provider data types.

use chrono::{DateTime, Utc};
use relnotes_commit::RawCommit;
use serde::{Deserialize, Serialize};

/// Hosted source-control service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// github.com
    Github,
}

/// Repository identity extracted from a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Service hosting the repository.
    pub provider: ProviderKind,
}

impl RepositoryInfo {
    /// Returns `owner/repo`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Start of the range (inclusive).
    pub start: DateTime<Utc>,

    /// End of the range (inclusive).
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a range. The caller guarantees `start <= end`.
    #[must_use]
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Returns true if `date` lies within the range.
    #[must_use]
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A merged pull request and its commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Pull request number.
    pub number: u64,

    /// Pull request title.
    pub title: String,

    /// When the pull request was merged.
    pub merged_at: DateTime<Utc>,

    /// Commits of the pull request, each carrying `number` as `pr_number`.
    pub commits: Vec<RawCommit>,
}
