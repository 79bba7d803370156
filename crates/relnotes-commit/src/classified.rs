//! Classified commit type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::raw::short_hash;
use crate::{CommitType, RawCommit};

/// A commit after classification.
///
/// Carries every field of the [`RawCommit`] it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedCommit {
    /// The commit hash (SHA).
    pub hash: String,

    /// The full original commit message.
    pub message: String,

    /// The commit author name.
    pub author: String,

    /// The commit date.
    pub date: DateTime<Utc>,

    /// The pull request this commit belongs to, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pr_number: Option<u64>,

    /// The classified type.
    pub r#type: CommitType,

    /// The optional scope.
    pub scope: Option<String>,

    /// The message with the type/scope marker stripped.
    pub description: String,

    /// Whether the message announces a breaking change.
    pub breaking_change: bool,
}

impl ClassifiedCommit {
    /// Creates a new classified commit builder.
    #[must_use]
    pub fn builder(hash: impl Into<String>, r#type: CommitType) -> ClassifiedCommitBuilder {
        ClassifiedCommitBuilder::new(hash, r#type)
    }

    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short_hash(&self) -> &str {
        short_hash(&self.hash)
    }

    /// Returns the reference shown next to the commit in documents:
    /// `#<pr>` when a pull request is known, otherwise the short hash.
    #[must_use]
    pub fn reference(&self) -> String {
        match self.pr_number {
            Some(number) => format!("#{number}"),
            None => self.short_hash().to_string(),
        }
    }
}

/// Builder for [`ClassifiedCommit`].
#[derive(Debug)]
pub struct ClassifiedCommitBuilder {
    hash: String,
    r#type: CommitType,
    scope: Option<String>,
    description: String,
    message: Option<String>,
    breaking_change: bool,
    author: String,
    date: DateTime<Utc>,
    pr_number: Option<u64>,
}

impl ClassifiedCommitBuilder {
    /// Creates a new builder with required fields.
    fn new(hash: impl Into<String>, r#type: CommitType) -> Self {
        Self {
            hash: hash.into(),
            r#type,
            scope: None,
            description: String::new(),
            message: None,
            breaking_change: false,
            author: String::new(),
            date: Utc::now(),
            pr_number: None,
        }
    }

    /// Copies the pass-through fields from a raw commit.
    #[must_use]
    pub fn raw(mut self, raw: &RawCommit) -> Self {
        self.hash.clone_from(&raw.hash);
        self.message = Some(raw.message.clone());
        self.author.clone_from(&raw.author);
        self.date = raw.date;
        self.pr_number = raw.pr_number;
        self
    }

    /// Sets the scope.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the original message.
    ///
    /// Defaults to the description when not set.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the breaking change flag.
    #[must_use]
    pub fn breaking_change(mut self, breaking_change: bool) -> Self {
        self.breaking_change = breaking_change;
        self
    }

    /// Sets the author.
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the date.
    #[must_use]
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Sets the pull request number.
    #[must_use]
    pub fn pr_number(mut self, pr_number: u64) -> Self {
        self.pr_number = Some(pr_number);
        self
    }

    /// Builds the [`ClassifiedCommit`].
    #[must_use]
    pub fn build(self) -> ClassifiedCommit {
        ClassifiedCommit {
            hash: self.hash,
            message: self.message.unwrap_or_else(|| self.description.clone()),
            author: self.author,
            date: self.date,
            pr_number: self.pr_number,
            r#type: self.r#type,
            scope: self.scope,
            description: self.description,
            breaking_change: self.breaking_change,
        }
    }
}
