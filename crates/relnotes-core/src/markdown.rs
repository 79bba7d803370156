//! Markdown rendering of release notes and changelogs.

use std::fmt::Write;

use relnotes_commit::{ClassifiedCommit, CommitGroups, CommitType};

const RELEASE_NOTES_TITLE: &str = "Release Notes";
const RELEASE_NOTES_EMPTY: &str = "No features or bug fixes in this release.";
const RELEASE_NOTES_SECTIONS: [CommitType; 2] = [CommitType::Feature, CommitType::Fix];

const CHANGELOG_TITLE: &str = "Changelog";
const CHANGELOG_EMPTY: &str = "No changes in this period.";

/// Renders release notes: features and bug fixes only.
///
/// Documentation, chores and uncategorized commits are never shown.
#[must_use]
pub fn generate_release_notes(groups: &CommitGroups) -> String {
    render_document(
        RELEASE_NOTES_TITLE,
        RELEASE_NOTES_EMPTY,
        &RELEASE_NOTES_SECTIONS,
        groups,
    )
}

/// Renders a changelog with one section per non-empty bucket.
#[must_use]
pub fn generate_changelog(groups: &CommitGroups) -> String {
    render_document(CHANGELOG_TITLE, CHANGELOG_EMPTY, &CommitType::ALL, groups)
}

/// Renders `# {title}` followed by one `##` section per non-empty bucket in
/// `sections` order, or the `empty` line when every listed bucket is empty.
fn render_document(
    title: &str,
    empty: &str,
    sections: &[CommitType],
    groups: &CommitGroups,
) -> String {
    let blocks: Vec<String> = sections
        .iter()
        .filter_map(|r#type| render_section(*r#type, groups.bucket(*r#type)))
        .collect();

    let body = if blocks.is_empty() {
        empty.to_string()
    } else {
        blocks.join("\n\n")
    };

    format!("# {title}\n\n{body}\n")
}

/// Renders one section, or `None` for an empty bucket.
fn render_section(r#type: CommitType, commits: &[ClassifiedCommit]) -> Option<String> {
    if commits.is_empty() {
        return None;
    }

    let mut output = String::new();
    _ = write!(output, "## {}\n\n", r#type.section_title());

    let items: Vec<String> = sort_chronologically(commits)
        .into_iter()
        .map(format_item)
        .collect();
    output.push_str(&items.join("\n"));

    Some(output)
}

/// Orders commits oldest first; equal dates keep their bucket order.
fn sort_chronologically(commits: &[ClassifiedCommit]) -> Vec<&ClassifiedCommit> {
    let mut sorted: Vec<_> = commits.iter().collect();
    sorted.sort_by_key(|commit| commit.date);
    sorted
}

/// Formats a commit as `- [**scope**: ]description (reference)`.
fn format_item(commit: &ClassifiedCommit) -> String {
    let scope = commit
        .scope
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| format!("**{s}**: "))
        .unwrap_or_default();

    format!("- {scope}{} ({})", commit.description, commit.reference())
}
