//! Generate command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::Args;
use relnotes_config::load_or_default;
use relnotes_provider::{DateRange, ProviderRegistry};
use relnotes_server::{GenerateParams, Generator, parse_date};
use tracing::info;

/// Arguments for the generate command.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Repository URL (https://github.com/{owner}/{repo})
    pub repository_url: String,

    /// Start of the range, inclusive (e.g. 2024-01-01 or 2024-01-01T00:00:00Z)
    #[arg(long, value_parser = parse_date_arg)]
    pub since: DateTime<Utc>,

    /// End of the range, inclusive
    #[arg(long, value_parser = parse_date_arg)]
    pub until: DateTime<Utc>,

    /// Access token for private repositories and higher rate limits
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Collect commits from pull requests merged in the range
    #[arg(long)]
    pub pull_requests: bool,

    /// Write release notes to this file instead of stdout
    #[arg(long)]
    pub release_notes: Option<PathBuf>,

    /// Write the changelog to this file instead of stdout
    #[arg(long)]
    pub changelog: Option<PathBuf>,

    /// Configuration file (default: nearest relnotes.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

fn parse_date_arg(value: &str) -> Result<DateTime<Utc>, String> {
    parse_date(value)
        .ok_or_else(|| format!("invalid date `{value}`, expected ISO 8601 (e.g. 2024-01-31)"))
}

/// Runs the generate command.
pub fn run(args: GenerateArgs) -> Result<()> {
    if args.until < args.since {
        bail!("--until must not be before --since");
    }

    let config =
        load_or_default(args.config.as_deref()).context("failed to load configuration")?;
    let registry =
        ProviderRegistry::from_config(&config.github).context("failed to configure providers")?;
    let generator = Generator::new(registry);

    let params = GenerateParams {
        repository_url: args.repository_url,
        range: DateRange::new(args.since, args.until),
        access_token: args.token,
        pull_requests: args.pull_requests,
    };

    let rt = tokio::runtime::Runtime::new().context("failed to create async runtime")?;
    let documents = rt
        .block_on(generator.generate(&params))
        .context("failed to generate release documents")?;

    match (&args.release_notes, &args.changelog) {
        (None, None) => {
            println!("{}", documents.release_notes);
            print!("{}", documents.changelog);
        }
        (release_notes, changelog) => {
            emit(release_notes.as_deref(), &documents.release_notes)?;
            emit(changelog.as_deref(), &documents.changelog)?;
        }
    }

    Ok(())
}

/// Writes `content` to `path`, or to stdout without one.
fn emit(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "document written");
        }
        None => print!("{content}"),
    }
    Ok(())
}
