// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git utilities for listing changed files in a revision range.
//!
//! Uses git2 (libgit2) to produce what `git diff --name-only <range>` prints,
//! without spawning a subprocess.
//!
//! ## Range Forms
//!
//! - `a..b`: tree of `a` against tree of `b` (an empty side means `HEAD`)
//! - `a...b`: merge base of `a` and `b` against tree of `b`
//! - `a`: tree of `a` against the working tree and index
//!
//! ## File Detection
//!
//! Rename detection follows `diff.renames`, as the git CLI does.
//!
//! - Added, modified, renamed files: path from `new_file()`
//! - Deleted files: path from `old_file()` (since `new_file()` is empty)

use std::path::Path;

use anyhow::Context;
use git2::{Diff, DiffDelta, Repository, RevparseMode, Tree};

use crate::error::{Error, Result};

/// The command line whose output `changed_files` reproduces.
pub fn diff_command(range: &str) -> String {
    format!("git diff --name-only {}", range)
}

/// Extract the repository-relative path of a delta, `/`-separated.
///
/// Order matters: try `new_file` first (works for add, modify, rename, copy),
/// then fall back to `old_file` (needed for delete).
fn extract_path(delta: &DiffDelta<'_>) -> Option<String> {
    delta
        .new_file()
        .path_bytes()
        .or_else(|| delta.old_file().path_bytes())
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
}

/// List files changed in `range`, in the order git reports them.
///
/// Any failure is reported as [`Error::Git`] naming the equivalent command.
pub fn changed_files(root: &Path, range: &str) -> Result<Vec<String>> {
    diff_names(root, range).map_err(|e| Error::Git {
        command: diff_command(range),
        message: format!("{:#}", e),
    })
}

fn diff_names(root: &Path, range: &str) -> anyhow::Result<Vec<String>> {
    let repo = Repository::discover(root).context("Failed to open repository")?;
    let mut diff = diff_for_range(&repo, range)?;
    // Honors diff.renames (on by default) so a move lists only its new path.
    diff.find_similar(None).context("Failed to detect renames")?;

    let files = diff.deltas().filter_map(|d| extract_path(&d)).collect();
    Ok(files)
}

fn diff_for_range<'r>(repo: &'r Repository, range: &str) -> anyhow::Result<Diff<'r>> {
    let spec = repo
        .revparse(range)
        .with_context(|| format!("Failed to resolve revision range: {}", range))?;
    let mode = spec.mode();

    let from = spec
        .from()
        .ok_or_else(|| anyhow::anyhow!("Revision range has no start: {}", range))?;

    if mode.contains(RevparseMode::SINGLE) {
        let tree = from.peel_to_tree().context("Failed to get tree for revision")?;
        return repo
            .diff_tree_to_workdir_with_index(Some(&tree), None)
            .context("Failed to compute diff");
    }

    let to = spec
        .to()
        .ok_or_else(|| anyhow::anyhow!("Revision range has no end: {}", range))?;
    let to_tree = to.peel_to_tree().context("Failed to get tree for range end")?;

    let from_tree: Tree<'r> = if mode.contains(RevparseMode::MERGE_BASE) {
        let base = repo
            .merge_base(from.id(), to.id())
            .with_context(|| format!("No merge base for {}", range))?;
        repo.find_commit(base)?
            .tree()
            .context("Failed to get tree for merge base")?
    } else {
        from.peel_to_tree()
            .context("Failed to get tree for range start")?
    };

    repo.diff_tree_to_tree(Some(&from_tree), Some(&to_tree), None)
        .context("Failed to compute diff")
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
