//! Precondition specifications.
//!
//! Missing context or arguments stop the run with exit status 1 before any
//! git or network work.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > Missing ZEPHYR_BASE exits 1 before argument parsing
#[test]
fn missing_context_exits_one() {
    labeler_cmd()
        .env_remove("ZEPHYR_BASE")
        .args(["-c", "base..HEAD"])
        .assert()
        .code(1)
        .stdout(predicates::str::is_empty());
}

/// > Argument parsing happens after the context check, even for bad flags
#[test]
fn missing_context_wins_over_bad_flags() {
    labeler_cmd()
        .env_remove("ZEPHYR_BASE")
        .arg("--no-such-flag")
        .assert()
        .code(1);
}

/// > Missing --commits exits 1
#[test]
fn missing_commits_exits_one() {
    let repo = Repo::with_changes(&["drivers/i2c/i2c_foo.c"]);
    repo.cmd()
        .assert()
        .code(1)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("commit range is required"));
}

/// > An empty commit range is treated as missing
#[test]
fn empty_commits_exits_one() {
    let repo = Repo::with_changes(&["drivers/i2c/i2c_foo.c"]);
    repo.cmd()
        .args(["--commits", ""])
        .assert()
        .code(1)
        .stdout(predicates::str::is_empty());
}

/// > An unresolvable range names the failing command
#[test]
fn unknown_revision_reports_git_command() {
    let repo = Repo::with_changes(&["drivers/i2c/i2c_foo.c"]);
    repo.cmd()
        .args(["-c", "nope..HEAD"])
        .assert()
        .code(1)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("git diff --name-only nope..HEAD"));
}

/// > A malformed repository exits 1
#[test]
fn malformed_repo_exits_one() {
    let repo = Repo::with_changes(&["drivers/i2c/i2c_foo.c"]);
    repo.cmd()
        .args(["-c", "base..HEAD", "-r", "zephyr", "-p", "1"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("expected owner/name"));
}

/// > An invalid rule file exits 1
#[test]
fn invalid_rule_file_exits_one() {
    let repo = Repo::with_changes(&["drivers/i2c/i2c_foo.c"]);
    let rules = repo.path().join("rules.toml");
    std::fs::write(&rules, "version = 2\n").unwrap();

    repo.cmd()
        .args(["-c", "base..HEAD", "--rules"])
        .arg(&rules)
        .assert()
        .code(1)
        .stderr(predicates::str::contains("unsupported config version 2"));
}
