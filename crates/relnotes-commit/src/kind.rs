//! Commit classification buckets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The type a commit is classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommitType {
    /// A new feature (`feat`).
    #[serde(rename = "feat")]
    Feature,

    /// A bug fix (`fix`).
    #[serde(rename = "fix")]
    Fix,

    /// A documentation change (`docs`).
    #[serde(rename = "docs")]
    Docs,

    /// Maintenance work (`chore`).
    #[serde(rename = "chore")]
    Chore,

    /// Anything that does not follow the convention.
    #[serde(rename = "uncategorized")]
    Uncategorized,
}

impl CommitType {
    /// All types, in document section order.
    pub const ALL: [Self; 5] = [
        Self::Feature,
        Self::Fix,
        Self::Docs,
        Self::Chore,
        Self::Uncategorized,
    ];

    /// Parses a conventional type token (case-insensitive).
    ///
    /// Returns `None` for tokens outside `feat`, `fix`, `docs` and `chore`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "feat" => Some(Self::Feature),
            "fix" => Some(Self::Fix),
            "docs" => Some(Self::Docs),
            "chore" => Some(Self::Chore),
            _ => None,
        }
    }

    /// Returns the lowercase token for this type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Chore => "chore",
            Self::Uncategorized => "uncategorized",
        }
    }

    /// Returns the heading used for this type's section in rendered documents.
    #[must_use]
    pub fn section_title(self) -> &'static str {
        match self {
            Self::Feature => "Features",
            Self::Fix => "Bug Fixes",
            Self::Docs => "Documentation",
            Self::Chore => "Chores",
            Self::Uncategorized => "Other Changes",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
