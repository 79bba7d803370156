//! Commit types for relnotes.
//!
//! This crate provides the commit types shared by every relnotes crate:
//! - [`RawCommit`]: A commit as returned by a source-control provider
//! - [`ClassifiedCommit`]: A commit after classification
//! - [`CommitType`]: The closed set of classification buckets
//! - [`CommitGroups`]: Classified commits partitioned by type

mod classified;
mod groups;
mod kind;
mod raw;

pub use classified::ClassifiedCommit;
pub use groups::CommitGroups;
pub use kind::CommitType;
pub use raw::RawCommit;
