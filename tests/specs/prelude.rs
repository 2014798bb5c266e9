//! Test helpers for behavioral specifications.
//!
//! Provides helpers for running the area-labeler binary against throwaway
//! git repositories.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Environment variables the binary reads; cleared so the host can't leak in.
const CLEARED_ENV: &[&str] = &[
    "GH_TOKEN",
    "GITHUB_API_URL",
    "AREA_LABELER_RULES",
    "AREA_LABELER_LOG",
];

/// Returns a Command for the area-labeler binary with a working context set.
pub fn labeler_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("area-labeler"));
    for var in CLEARED_ENV {
        cmd.env_remove(var);
    }
    cmd.env("ZEPHYR_BASE", "/opt/zephyr");
    cmd
}

/// A git repository with a commit tagged `base` and one commit on top.
pub struct Repo {
    pub dir: TempDir,
}

impl Repo {
    /// Create a repository whose `base..HEAD` range changes `files`.
    pub fn with_changes(files: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        git(dir.path(), &["init"]);
        git(dir.path(), &["config", "user.email", "test@example.com"]);
        git(dir.path(), &["config", "user.name", "Test User"]);

        write(dir.path(), "README.md", "# Project\n");
        git(dir.path(), &["add", "README.md"]);
        git(dir.path(), &["commit", "-m", "chore: initial commit"]);
        git(dir.path(), &["tag", "base"]);

        for file in files {
            write(dir.path(), file, "content\n");
            git(dir.path(), &["add", file]);
        }
        if !files.is_empty() {
            git(dir.path(), &["commit", "-m", "feat: changes"]);
        }

        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The binary, run inside this repository.
    pub fn cmd(&self) -> Command {
        let mut cmd = labeler_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}

fn write(root: &Path, path: &str, content: &str) {
    let full = root.join(path);
    if let Some(parent) = full.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(full, content).unwrap();
}

fn git(root: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(root)
        .output()
        .expect("Failed to run git");
    assert!(output.status.success(), "git {:?} failed", args);
}
