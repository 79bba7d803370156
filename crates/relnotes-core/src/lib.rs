//! Core library for relnotes.
//!
//! Turns raw commits into release documents in three pure steps:
//! - [`classify`]: extracts type, scope, description and breaking flag
//!   from a commit message
//! - [`categorize`]: partitions classified commits into [`CommitGroups`]
//! - [`generate_release_notes`] / [`generate_changelog`]: render the groups
//!   as markdown
//!
//! Nothing here performs I/O; every function is deterministic given its input.

mod categorizer;
mod classifier;
mod markdown;

pub use categorizer::{categorize, group};
pub use classifier::classify;
pub use markdown::{generate_changelog, generate_release_notes};

pub use relnotes_commit::{ClassifiedCommit, CommitGroups, CommitType, RawCommit};
