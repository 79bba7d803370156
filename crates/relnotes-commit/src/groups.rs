//! Classified commits grouped by type.

use serde::{Deserialize, Serialize};

use crate::{ClassifiedCommit, CommitType};

/// Classified commits partitioned into one ordered bucket per [`CommitType`].
///
/// Every commit pushed lands in exactly one bucket; order within a bucket is
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitGroups {
    /// `feat` commits.
    pub features: Vec<ClassifiedCommit>,

    /// `fix` commits.
    pub fixes: Vec<ClassifiedCommit>,

    /// `docs` commits.
    pub docs: Vec<ClassifiedCommit>,

    /// `chore` commits.
    pub chores: Vec<ClassifiedCommit>,

    /// Commits that do not follow the convention.
    pub uncategorized: Vec<ClassifiedCommit>,
}

impl CommitGroups {
    /// Creates empty groups.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a commit to the bucket matching its type.
    pub fn push(&mut self, commit: ClassifiedCommit) {
        self.bucket_mut(commit.r#type).push(commit);
    }

    /// Returns the bucket for a type.
    #[must_use]
    pub fn bucket(&self, r#type: CommitType) -> &[ClassifiedCommit] {
        match r#type {
            CommitType::Feature => &self.features,
            CommitType::Fix => &self.fixes,
            CommitType::Docs => &self.docs,
            CommitType::Chore => &self.chores,
            CommitType::Uncategorized => &self.uncategorized,
        }
    }

    fn bucket_mut(&mut self, r#type: CommitType) -> &mut Vec<ClassifiedCommit> {
        match r#type {
            CommitType::Feature => &mut self.features,
            CommitType::Fix => &mut self.fixes,
            CommitType::Docs => &mut self.docs,
            CommitType::Chore => &mut self.chores,
            CommitType::Uncategorized => &mut self.uncategorized,
        }
    }

    /// Returns the total number of commits across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        CommitType::ALL.iter().map(|t| self.bucket(*t).len()).sum()
    }

    /// Returns true if every bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every commit, bucket by bucket in section order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassifiedCommit> {
        CommitType::ALL.into_iter().flat_map(|t| self.bucket(t))
    }
}

impl FromIterator<ClassifiedCommit> for CommitGroups {
    fn from_iter<I: IntoIterator<Item = ClassifiedCommit>>(iter: I) -> Self {
        let mut groups = Self::new();
        for commit in iter {
            groups.push(commit);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_commit(hash: &str, r#type: CommitType) -> ClassifiedCommit {
        ClassifiedCommit::builder(hash, r#type)
            .description(hash)
            .build()
    }

    #[test]
    fn test_new_is_empty() {
        let groups = CommitGroups::new();
        assert!(groups.is_empty());
        assert_eq!(groups.len(), 0);
    }

    #[test]
    fn test_push_routes_by_type() {
        let mut groups = CommitGroups::new();
        groups.push(make_commit("a", CommitType::Feature));
        groups.push(make_commit("b", CommitType::Fix));
        groups.push(make_commit("c", CommitType::Docs));
        groups.push(make_commit("d", CommitType::Chore));
        groups.push(make_commit("e", CommitType::Uncategorized));

        assert_eq!(groups.features[0].hash, "a");
        assert_eq!(groups.fixes[0].hash, "b");
        assert_eq!(groups.docs[0].hash, "c");
        assert_eq!(groups.chores[0].hash, "d");
        assert_eq!(groups.uncategorized[0].hash, "e");
        assert_eq!(groups.len(), 5);
    }

    #[test]
    fn test_from_iter_preserves_order() {
        let groups: CommitGroups = [
            make_commit("f1", CommitType::Feature),
            make_commit("x1", CommitType::Fix),
            make_commit("f2", CommitType::Feature),
        ]
        .into_iter()
        .collect();

        let hashes: Vec<_> = groups.features.iter().map(|c| c.hash.as_str()).collect();
        assert_eq!(hashes, ["f1", "f2"]);
        assert_eq!(groups.bucket(CommitType::Fix).len(), 1);
    }

    #[test]
    fn test_iter_visits_section_order() {
        let groups: CommitGroups = [
            make_commit("other", CommitType::Uncategorized),
            make_commit("feat", CommitType::Feature),
        ]
        .into_iter()
        .collect();

        let hashes: Vec<_> = groups.iter().map(|c| c.hash.as_str()).collect();
        assert_eq!(hashes, ["feat", "other"]);
    }
}
