//! Provider trait.

use async_trait::async_trait;
use relnotes_commit::RawCommit;

use crate::{DateRange, ProviderResult, PullRequest, RepositoryInfo};

/// Fetches commit history from a hosted source-control service.
///
/// Implemented once per supported host. Consumers only see [`RawCommit`]s
/// and never depend on which implementation produced them.
#[async_trait]
pub trait VersionControlProvider: Send + Sync {
    /// Returns the provider name.
    fn name(&self) -> &'static str;

    /// Returns whether this provider handles the given repository URL.
    fn supports(&self, url: &str) -> bool;

    /// Extracts the repository identity from a URL.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ProviderError::InvalidUrl`] if the URL does not name
    /// a repository.
    fn parse_repository_url(&self, url: &str) -> ProviderResult<RepositoryInfo>;

    /// Fetches commits authored within `range`.
    ///
    /// `token` overrides any credentials configured on the provider.
    ///
    /// # Errors
    ///
    /// Returns an error whose [`crate::ErrorKind`] tells not-found,
    /// authentication, rate limiting and network failures apart.
    async fn fetch_commits(
        &self,
        repo: &RepositoryInfo,
        range: &DateRange,
        token: Option<&str>,
    ) -> ProviderResult<Vec<RawCommit>>;

    /// Fetches pull requests merged within `range`, with their commits.
    ///
    /// # Errors
    ///
    /// Same as [`VersionControlProvider::fetch_commits`].
    async fn fetch_pull_requests(
        &self,
        repo: &RepositoryInfo,
        range: &DateRange,
        token: Option<&str>,
    ) -> ProviderResult<Vec<PullRequest>>;
}
