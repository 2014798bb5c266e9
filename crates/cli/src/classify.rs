// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Changed-file classification.
//!
//! A rule is triggered when any of its patterns matches any changed path.
//! Triggered rules contribute their labels once each, in table order.
//! Labels shared between rules are not deduplicated.

use crate::rules::RuleSet;

/// Default upper bound on labels applied in one run.
pub const DEFAULT_MAX_LABELS: usize = 10;

/// The labels produced for a changed-file set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    /// Areas whose rules were triggered, in table order.
    pub areas: Vec<String>,
    /// Labels to apply, in table order.
    pub labels: Vec<String>,
}

impl LabelSet {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the set is too broad to apply.
    pub fn exceeds(&self, max: usize) -> bool {
        self.labels.len() > max
    }

    /// Labels joined for display (`"a, b"`).
    pub fn joined(&self) -> String {
        self.labels.join(", ")
    }
}

/// Classify changed paths against a rule table.
pub fn classify<S: AsRef<str>>(files: &[S], rules: &RuleSet) -> LabelSet {
    rules
        .rules()
        .iter()
        .filter(|rule| files.iter().any(|f| rule.matches(f.as_ref())))
        .fold(LabelSet::default(), |mut set, rule| {
            set.areas.push(rule.area.clone());
            set.labels.extend(rule.labels.iter().cloned());
            set
        })
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
