//! Commit categorization.

use relnotes_commit::{ClassifiedCommit, CommitGroups, RawCommit};
use tracing::debug;

use crate::classify;

/// Classifies every commit and partitions them by type.
///
/// The partition is stable: commits keep their relative input order within
/// each bucket.
#[must_use]
pub fn categorize(commits: &[RawCommit]) -> CommitGroups {
    group(commits.iter().map(classify))
}

/// Partitions already classified commits by type.
pub fn group(commits: impl IntoIterator<Item = ClassifiedCommit>) -> CommitGroups {
    let groups: CommitGroups = commits.into_iter().collect();

    debug!(
        features = groups.features.len(),
        fixes = groups.fixes.len(),
        docs = groups.docs.len(),
        chores = groups.chores.len(),
        uncategorized = groups.uncategorized.len(),
        "categorized commits"
    );

    groups
}
