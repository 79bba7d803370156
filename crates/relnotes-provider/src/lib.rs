//! Source-control providers for relnotes.
//!
//! This crate fetches commit history from hosted source-control services:
//! - [`VersionControlProvider`]: the capability every provider implements
//! - [`GitHubProvider`]: GitHub REST API implementation
//! - [`ProviderRegistry`]: picks the provider for a repository URL

mod error;
mod github;
mod registry;
mod traits;
mod types;

pub use error::{ErrorKind, ProviderError, ProviderResult};
pub use github::GitHubProvider;
pub use registry::ProviderRegistry;
pub use traits::VersionControlProvider;
pub use types::{DateRange, ProviderKind, PullRequest, RepositoryInfo};
