// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Applying classified labels to a pull request.
//!
//! Labels are attached one at a time. A failure stops the run and leaves
//! the labels already attached in place.

use crate::error::Result;
use crate::github::{LabelService, RepoSlug};

/// The pull request to label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub repo: RepoSlug,
    pub pull_request: u64,
}

impl Target {
    /// Build a target only when both parts are present.
    ///
    /// A pull-request number of 0 or an empty repository counts as absent.
    /// The repository is only parsed once both are present, so a stray
    /// `--repo` on a dry run is never an error.
    pub fn from_args(repo: Option<&str>, pull_request: u64) -> Result<Option<Self>> {
        match repo {
            Some(repo) if !repo.is_empty() && pull_request != 0 => {
                let repo = repo.parse::<RepoSlug>()?;
                Ok(Some(Target { repo, pull_request }))
            }
            _ => Ok(None),
        }
    }
}

/// Outcome of an apply run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Labels attached, in order.
    pub applied: Vec<String>,
    /// Labels the repository does not define.
    pub missing: Vec<String>,
}

/// Attach each label the repository defines to the target pull request.
pub fn apply_labels<S>(service: &S, target: &Target, labels: &[String]) -> Result<ApplyReport>
where
    S: LabelService + ?Sized,
{
    let pr = service.pull_request(&target.repo, target.pull_request)?;
    tracing::info!("labeling {}#{}: {}", target.repo, pr.number, pr.title);

    let mut report = ApplyReport::default();
    for name in labels {
        match service.find_label(&target.repo, name)? {
            Some(label) => {
                service.add_label(&target.repo, pr.number, &label)?;
                tracing::info!("applied label '{}'", label.name);
                report.applied.push(label.name);
            }
            None => {
                tracing::debug!("label '{}' not defined in {}, skipping", name, target.repo);
                report.missing.push(name.clone());
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod tests;
