// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass labeling run.
//!
//! Classifies the changed files, reports the labels, enforces the label
//! limit, and hands the labels to the remote service when a target is set.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::apply::{ApplyReport, Target, apply_labels};
use crate::classify::{DEFAULT_MAX_LABELS, LabelSet, classify};
use crate::config;
use crate::error::{Error, Result};
use crate::github::LabelService;
use crate::rules::RuleSet;

/// Rule table and limit for a run.
pub struct Labeler {
    rules: RuleSet,
    max_labels: usize,
}

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Labels computed, no target to apply them to.
    DryRun(LabelSet),
    /// More labels than the limit; nothing applied.
    TooManyLabels(LabelSet),
    /// Labels applied to the target.
    Applied(LabelSet, ApplyReport),
}

impl Labeler {
    pub fn new(rules: RuleSet, max_labels: usize) -> Self {
        Self { rules, max_labels }
    }

    /// Load rules from `path`, or the built-in table when `path` is `None`.
    ///
    /// `max_labels` overrides the rule file's limit; both default to
    /// [`DEFAULT_MAX_LABELS`].
    pub fn load(path: Option<&Path>, max_labels: Option<usize>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = config::load(path)?;
                let rules = RuleSet::compile(&config.rules).map_err(|e| Error::Config {
                    message: e.to_string(),
                    path: Some(path.to_path_buf()),
                })?;
                tracing::debug!("loaded {} rules from {}", rules.len(), path.display());
                let max = max_labels.or(config.max_labels).unwrap_or(DEFAULT_MAX_LABELS);
                Ok(Self::new(rules, max))
            }
            None => {
                let rules = RuleSet::builtin().map_err(|e| Error::Internal(e.to_string()))?;
                Ok(Self::new(rules, max_labels.unwrap_or(DEFAULT_MAX_LABELS)))
            }
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn max_labels(&self) -> usize {
        self.max_labels
    }

    /// Run one labeling pass, writing progress lines to `out`.
    ///
    /// `connect` is only called when there is a target and the label set is
    /// within the limit.
    pub fn run<W, F>(
        &self,
        files: &[String],
        target: Option<&Target>,
        connect: F,
        out: &mut W,
    ) -> Result<Outcome>
    where
        W: Write,
        F: FnOnce() -> Result<Box<dyn LabelService>>,
    {
        tracing::debug!("{} changed files", files.len());
        let set = classify(files, &self.rules);
        tracing::debug!("triggered areas: {:?}", set.areas);

        write_line(out, &format!("Labels to apply: {}", set.joined()))?;
        if set.exceeds(self.max_labels) {
            write_line(out, "too many labels, aborting...")?;
            return Ok(Outcome::TooManyLabels(set));
        }

        let Some(target) = target else {
            return Ok(Outcome::DryRun(set));
        };

        let service = connect()?;
        let report = apply_labels(service.as_ref(), target, &set.labels)?;
        Ok(Outcome::Applied(set, report))
    }

    /// Print the rule table, one rule per line.
    pub fn list_rules<W: Write>(&self, out: &mut W) -> Result<()> {
        for rule in self.rules.rules() {
            let patterns: Vec<&str> = rule.patterns.iter().map(|p| p.as_str()).collect();
            write_line(
                out,
                &format!(
                    "{}: {} -> {}",
                    rule.area,
                    patterns.join(" "),
                    rule.labels.join(", ")
                ),
            )?;
        }
        Ok(())
    }
}

fn write_line<W: Write>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{}", line).map_err(|source| Error::Io {
        path: PathBuf::from("<stdout>"),
        source,
    })
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
