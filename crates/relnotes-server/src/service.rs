//! Document generation service.

use std::collections::HashSet;
use std::sync::Arc;

use relnotes_core::{RawCommit, categorize, generate_changelog, generate_release_notes};
use relnotes_provider::{DateRange, ProviderError, ProviderRegistry, VersionControlProvider};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while generating documents, by stage.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No provider handles the repository URL.
    #[error(transparent)]
    Unsupported(ProviderError),

    /// The provider could not parse the repository URL.
    #[error(transparent)]
    InvalidUrl(ProviderError),

    /// Fetching commit history failed.
    #[error(transparent)]
    Fetch(ProviderError),
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Input of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateParams {
    /// Repository URL, e.g. `https://github.com/owner/repo`.
    pub repository_url: String,

    /// Inclusive date range.
    pub range: DateRange,

    /// Access token overriding the provider default.
    pub access_token: Option<String>,

    /// Collect commits from merged pull requests instead of the branch history.
    pub pull_requests: bool,
}

/// Rendered documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDocuments {
    /// Features and fixes only.
    pub release_notes: String,

    /// Every category.
    pub changelog: String,
}

/// Fetches commits and renders release notes and a changelog.
#[derive(Debug, Clone)]
pub struct Generator {
    registry: Arc<ProviderRegistry>,
}

impl Generator {
    /// Creates a generator over the given providers.
    #[must_use]
    pub fn new(registry: ProviderRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Runs the whole pipeline for one repository and range.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is unsupported or malformed, or if the
    /// provider fails to fetch commits.
    pub async fn generate(&self, params: &GenerateParams) -> ServiceResult<GeneratedDocuments> {
        let url = params.repository_url.trim();
        let provider = self.registry.select(url).map_err(ServiceError::Unsupported)?;
        let repo = provider
            .parse_repository_url(url)
            .map_err(ServiceError::InvalidUrl)?;

        info!(
            repository = %repo.full_name(),
            start = %params.range.start,
            end = %params.range.end,
            pull_requests = params.pull_requests,
            "generating release documents"
        );

        let token = params
            .access_token
            .as_deref()
            .filter(|token| !token.trim().is_empty());

        let commits = if params.pull_requests {
            collect_pull_request_commits(provider.as_ref(), &repo, &params.range, token).await
        } else {
            provider.fetch_commits(&repo, &params.range, token).await
        }
        .map_err(ServiceError::Fetch)?;

        let groups = categorize(&commits);
        debug!(commits = commits.len(), "commits categorized");

        Ok(GeneratedDocuments {
            release_notes: generate_release_notes(&groups),
            changelog: generate_changelog(&groups),
        })
    }
}

/// Flattens merged pull requests into commits, keeping the first
/// occurrence of each hash.
async fn collect_pull_request_commits(
    provider: &dyn VersionControlProvider,
    repo: &relnotes_provider::RepositoryInfo,
    range: &DateRange,
    token: Option<&str>,
) -> Result<Vec<RawCommit>, ProviderError> {
    let pulls = provider.fetch_pull_requests(repo, range, token).await?;

    let mut seen = HashSet::new();
    Ok(pulls
        .into_iter()
        .flat_map(|pull| pull.commits)
        .filter(|commit| seen.insert(commit.hash.clone()))
        .collect())
}
