//! End-to-end CLI integration tests.
//!
//! These tests run the relnotes binary in a temporary directory. The
//! generate tests point the GitHub provider at a local stand-in server.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use assert_cmd::Command;
use axum::{Json, Router, routing::get};
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn relnotes(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_relnotes"));
    cmd.current_dir(dir)
        .env_remove("GITHUB_TOKEN")
        .env_remove("PORT")
        .env_remove("RUST_LOG");
    cmd
}

/// Starts a stand-in for the GitHub API on a background thread.
fn spawn_github() -> SocketAddr {
    let router = Router::new().route(
        "/repos/{owner}/{repo}/commits",
        get(|| async {
            Json(json!([
                {
                    "sha": "abc1234aaaaaaa",
                    "commit": {
                        "message": "feat(cli): add generate command (#7)",
                        "author": { "name": "Ada", "date": "2024-01-10T09:00:00Z" }
                    }
                },
                {
                    "sha": "def5678bbbbbbb",
                    "commit": {
                        "message": "chore: bump deps",
                        "author": { "name": "Bob", "date": "2024-01-11T09:00:00Z" }
                    }
                }
            ]))
        }),
    );

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    let addr = listener.local_addr().expect("failed to read address");
    listener
        .set_nonblocking(true)
        .expect("failed to set nonblocking");

    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("failed to create runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("invalid listener");
            axum::serve(listener, router).await.expect("server failed");
        });
    });

    addr
}

fn write_config(dir: &Path, addr: SocketAddr) -> std::path::PathBuf {
    let path = dir.join("relnotes.toml");
    fs::write(
        &path,
        format!("[github]\napi_url = \"http://{addr}\"\ntimeout_secs = 5\n"),
    )
    .expect("failed to write config");
    path
}

// ---- init ----

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    relnotes(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created relnotes.toml"));

    let content = fs::read_to_string(temp_dir.path().join("relnotes.toml")).unwrap();
    assert!(content.contains("[server]"), "config should have server section");
    assert!(content.contains("[github]"), "config should have github section");
    assert!(content.contains("port = 3001"));
    assert!(content.contains("https://api.github.com"));
}

#[test]
fn test_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("relnotes.toml");
    fs::write(&config_path, "# old config\n").unwrap();

    relnotes(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    relnotes(temp_dir.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(!content.contains("# old config"), "config should be overwritten");
}

// ---- help ----

#[test]
fn test_help_lists_commands() {
    let temp_dir = TempDir::new().unwrap();

    relnotes(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("generate")
                .and(predicate::str::contains("serve"))
                .and(predicate::str::contains("init")),
        );
}

// ---- generate ----

#[test]
fn test_generate_rejects_invalid_date() {
    let temp_dir = TempDir::new().unwrap();

    relnotes(temp_dir.path())
        .args([
            "generate",
            "https://github.com/acme/widgets",
            "--since",
            "last week",
            "--until",
            "2024-01-31",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn test_generate_rejects_reversed_range() {
    let temp_dir = TempDir::new().unwrap();

    relnotes(temp_dir.path())
        .args([
            "generate",
            "https://github.com/acme/widgets",
            "--since",
            "2024-02-01",
            "--until",
            "2024-01-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--until must not be before --since"));
}

#[test]
fn test_generate_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();

    relnotes(temp_dir.path())
        .args([
            "generate",
            "https://github.com/acme/widgets",
            "--since",
            "2024-01-01",
            "--until",
            "2024-01-31",
            "--config",
            "missing.toml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn test_generate_unsupported_host() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("relnotes.toml"), "").unwrap();

    relnotes(temp_dir.path())
        .args([
            "generate",
            "https://gitlab.com/acme/widgets",
            "--since",
            "2024-01-01",
            "--until",
            "2024-01-31",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported repository URL"));
}

#[test]
fn test_generate_prints_documents() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path(), spawn_github());

    relnotes(temp_dir.path())
        .args([
            "generate",
            "https://github.com/acme/widgets",
            "--since",
            "2024-01-01",
            "--until",
            "2024-01-31",
            "--config",
        ])
        .arg(&config)
        .assert()
        .success()
        .stdout(
            predicate::str::contains(
                "# Release Notes\n\n## Features\n\n- **cli**: add generate command (#7)\n",
            )
            .and(predicate::str::contains("## Chores\n\n- bump deps (def5678)\n")),
        );
}

#[test]
fn test_generate_writes_files() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path(), spawn_github());
    let notes = temp_dir.path().join("RELEASE_NOTES.md");
    let changelog = temp_dir.path().join("CHANGELOG.md");

    relnotes(temp_dir.path())
        .args([
            "generate",
            "https://github.com/acme/widgets",
            "--since",
            "2024-01-01",
            "--until",
            "2024-01-31",
        ])
        .arg("--config")
        .arg(&config)
        .arg("--release-notes")
        .arg(&notes)
        .arg("--changelog")
        .arg(&changelog)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let notes = fs::read_to_string(notes).unwrap();
    assert_eq!(
        notes,
        "# Release Notes\n\n## Features\n\n- **cli**: add generate command (#7)\n"
    );

    let changelog = fs::read_to_string(changelog).unwrap();
    assert_eq!(
        changelog,
        "# Changelog\n\n## Features\n\n- **cli**: add generate command (#7)\n\n## Chores\n\n- bump deps (def5678)\n"
    );
}
