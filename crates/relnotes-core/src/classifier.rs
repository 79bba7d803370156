//! Conventional commit classification.

use std::sync::LazyLock;

use regex::Regex;
use relnotes_commit::{ClassifiedCommit, CommitType, RawCommit};

static CONVENTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // ASCII-only case folding for the type token: `ſ` must not match `s`.
    Regex::new(
        r"^(?i-u:(?P<type>feat|fix|docs|chore))(?:\((?P<scope>[^)]+)\))?:\s*(?P<description>.+)",
    )
    .expect("invalid regex")
});

/// Markers that flag a breaking change anywhere in the message.
const BREAKING_MARKERS: [&str; 2] = ["BREAKING CHANGE", "!:"];

/// Classifies a raw commit by its message.
///
/// Messages starting with `feat`, `fix`, `docs` or `chore` (any case),
/// optionally followed by `(scope)`, then `:` are classified by that token.
/// Everything else is [`CommitType::Uncategorized`] with the whole trimmed
/// message as description.
///
/// The breaking change flag is set whenever the full message contains
/// `BREAKING CHANGE` or `!:`, whether or not the prefix matched.
#[must_use]
pub fn classify(raw: &RawCommit) -> ClassifiedCommit {
    let breaking_change = is_breaking(&raw.message);

    let matched = CONVENTIONAL_RE.captures(&raw.message).and_then(|captures| {
        let r#type = CommitType::from_token(captures.name("type")?.as_str())?;
        Some((r#type, captures))
    });

    let builder = match matched {
        Some((r#type, captures)) => {
            let description = captures
                .name("description")
                .map_or("", |m| m.as_str().trim());

            let builder = ClassifiedCommit::builder(&raw.hash, r#type).description(description);
            match captures.name("scope") {
                Some(scope) => builder.scope(scope.as_str()),
                None => builder,
            }
        }
        None => ClassifiedCommit::builder(&raw.hash, CommitType::Uncategorized)
            .description(raw.message.trim()),
    };

    builder.raw(raw).breaking_change(breaking_change).build()
}

fn is_breaking(message: &str) -> bool {
    BREAKING_MARKERS.iter().any(|marker| message.contains(marker))
}
