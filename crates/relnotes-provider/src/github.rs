//! GitHub REST API provider.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use futures::future::try_join_all;
use regex::Regex;
use relnotes_commit::RawCommit;
use relnotes_config::GithubConfig;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    DateRange, ProviderError, ProviderKind, ProviderResult, PullRequest, RepositoryInfo,
    VersionControlProvider,
};

static REPOSITORY_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://github\.com/([^/]+)/([^/]+?)(?:\.git)?/?$").expect("invalid regex")
});

static PR_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(#(\d+)\)|PR #(\d+)").expect("invalid regex"));

const HOST: &str = "github.com";
const ACCEPT: &str = "application/vnd.github+json";
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Commit entry of `GET /repos/{owner}/{repo}/commits`.
#[derive(Debug, Deserialize)]
struct CommitItem {
    sha: String,
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    message: String,
    author: Option<Signature>,
    committer: Option<Signature>,
}

#[derive(Debug, Deserialize)]
struct Signature {
    name: Option<String>,
    date: Option<DateTime<Utc>>,
}

/// Pull request entry of `GET /repos/{owner}/{repo}/pulls`.
#[derive(Debug, Deserialize)]
struct PullItem {
    number: u64,
    title: String,
    merged_at: Option<DateTime<Utc>>,
}

impl CommitItem {
    fn into_raw_commit(self, fallback_date: DateTime<Utc>) -> RawCommit {
        let CommitDetail {
            message,
            author,
            committer,
        } = self.commit;

        let name = author
            .as_ref()
            .and_then(|a| a.name.clone())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
        let date = author
            .and_then(|a| a.date)
            .or_else(|| committer.and_then(|c| c.date))
            .unwrap_or(fallback_date);
        let pr_number = extract_pr_number(&message);

        let commit = RawCommit::new(self.sha, message, name, date);
        match pr_number {
            Some(number) => commit.with_pr_number(number),
            None => commit,
        }
    }
}

/// Extracts a pull request number from `(#123)` or `PR #123`.
fn extract_pr_number(message: &str) -> Option<u64> {
    let captures = PR_NUMBER_RE.captures(message)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .and_then(|m| m.as_str().parse().ok())
}

/// Provider backed by the GitHub REST API.
pub struct GitHubProvider {
    client: reqwest::Client,
    api_url: String,
    per_page: u32,
    default_token: Option<String>,
}

impl GitHubProvider {
    /// Creates a provider from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &GithubConfig) -> ProviderResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Client(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            per_page: config.per_page,
            default_token: None,
        })
    }

    /// Sets the token used when a call does not supply one.
    #[must_use]
    pub fn with_default_token(mut self, token: Option<String>) -> Self {
        self.default_token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Performs an authenticated GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: Option<&str>,
        repo: &RepositoryInfo,
    ) -> ProviderResult<T> {
        let url = format!("{}{path}", self.api_url);
        let token = token.or(self.default_token.as_deref());
        debug!(%url, authenticated = token.is_some(), "GitHub API request");

        let mut request = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .query(query);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%url, error = %e, "GitHub API unreachable");
            ProviderError::Network(e.to_string())
        })?;

        let response = check_status(response, repo).await?;

        response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }

    async fn fetch_pull_request(
        &self,
        repo: &RepositoryInfo,
        pull: PullItem,
        merged_at: DateTime<Utc>,
        token: Option<&str>,
    ) -> ProviderResult<PullRequest> {
        let path = format!(
            "/repos/{}/{}/pulls/{}/commits",
            repo.owner, repo.repo, pull.number
        );
        let query = [("per_page", self.per_page.to_string())];
        let items: Vec<CommitItem> = self.get_json(&path, &query, token, repo).await?;

        let commits = items
            .into_iter()
            .map(|item| item.into_raw_commit(merged_at).with_pr_number(pull.number))
            .collect();

        Ok(PullRequest {
            number: pull.number,
            title: pull.title,
            merged_at,
            commits,
        })
    }
}

/// Maps a non-success response to a provider error.
async fn check_status(
    response: reqwest::Response,
    repo: &RepositoryInfo,
) -> ProviderResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let quota_exhausted = response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0");
    let body = response.text().await.unwrap_or_default();
    let rate_limited = quota_exhausted || body.to_lowercase().contains("rate limit");

    debug!(status = status.as_u16(), "GitHub API returned an error status");

    Err(match status {
        StatusCode::NOT_FOUND => ProviderError::NotFound(repo.full_name()),
        StatusCode::UNAUTHORIZED => {
            ProviderError::AuthFailed("invalid or missing access token".to_string())
        }
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS if rate_limited => {
            ProviderError::RateLimited
        }
        StatusCode::FORBIDDEN => ProviderError::Forbidden(repo.full_name()),
        _ => ProviderError::Api {
            status: status.as_u16(),
            body,
        },
    })
}

fn api_timestamp(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[async_trait]
impl VersionControlProvider for GitHubProvider {
    fn name(&self) -> &'static str {
        "github"
    }

    fn supports(&self, url: &str) -> bool {
        url.contains(HOST)
    }

    fn parse_repository_url(&self, url: &str) -> ProviderResult<RepositoryInfo> {
        let captures = REPOSITORY_URL_RE
            .captures(url.trim())
            .ok_or_else(|| ProviderError::InvalidUrl(url.to_string()))?;

        Ok(RepositoryInfo {
            owner: captures[1].to_string(),
            repo: captures[2].to_string(),
            provider: ProviderKind::Github,
        })
    }

    async fn fetch_commits(
        &self,
        repo: &RepositoryInfo,
        range: &DateRange,
        token: Option<&str>,
    ) -> ProviderResult<Vec<RawCommit>> {
        let path = format!("/repos/{}/{}/commits", repo.owner, repo.repo);
        let query = [
            ("since", api_timestamp(range.start)),
            ("until", api_timestamp(range.end)),
            ("per_page", self.per_page.to_string()),
        ];

        let items: Vec<CommitItem> = self.get_json(&path, &query, token, repo).await?;
        let now = Utc::now();
        let commits: Vec<RawCommit> = items
            .into_iter()
            .map(|item| item.into_raw_commit(now))
            .collect();

        debug!(repository = %repo.full_name(), count = commits.len(), "fetched commits");
        Ok(commits)
    }

    async fn fetch_pull_requests(
        &self,
        repo: &RepositoryInfo,
        range: &DateRange,
        token: Option<&str>,
    ) -> ProviderResult<Vec<PullRequest>> {
        let path = format!("/repos/{}/{}/pulls", repo.owner, repo.repo);
        let query = [
            ("state", "closed".to_string()),
            ("sort", "updated".to_string()),
            ("direction", "desc".to_string()),
            ("per_page", self.per_page.to_string()),
        ];

        let pulls: Vec<PullItem> = self.get_json(&path, &query, token, repo).await?;
        let merged = pulls.into_iter().filter_map(|pull| {
            let merged_at = pull.merged_at.filter(|at| range.contains(*at))?;
            Some((pull, merged_at))
        });

        let pull_requests = try_join_all(
            merged.map(|(pull, merged_at)| self.fetch_pull_request(repo, pull, merged_at, token)),
        )
        .await?;

        debug!(
            repository = %repo.full_name(),
            count = pull_requests.len(),
            "fetched merged pull requests"
        );
        Ok(pull_requests)
    }
}
