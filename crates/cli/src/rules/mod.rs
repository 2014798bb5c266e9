// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Area rules: which changed paths map to which pull-request labels.
//!
//! A [`Rule`] is plain data (from the built-in table or a rule file).
//! A [`RuleSet`] holds the same rules with their patterns compiled, ready
//! for classification.

pub mod builtin;

use serde::Deserialize;

use crate::pattern::{PathPattern, PatternError};

/// A named association between path patterns and labels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rule {
    /// Human-readable area name (informational only).
    pub area: String,
    /// Patterns matched from the start of each changed path.
    pub patterns: Vec<String>,
    /// Labels emitted when any pattern matches any path.
    pub labels: Vec<String>,
}

/// A rule with compiled patterns.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub area: String,
    pub patterns: Vec<PathPattern>,
    pub labels: Vec<String>,
}

impl CompiledRule {
    /// Compile every pattern of `rule`.
    pub fn compile(rule: &Rule) -> Result<Self, PatternError> {
        let patterns = rule
            .patterns
            .iter()
            .map(|p| PathPattern::compile(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            area: rule.area.clone(),
            patterns,
            labels: rule.labels.clone(),
        })
    }

    /// Whether any pattern matches `path`.
    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(path))
    }
}

/// An ordered, compiled rule table.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Compile a rule table, preserving its order.
    pub fn compile(rules: &[Rule]) -> Result<Self, PatternError> {
        let rules = rules
            .iter()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// The built-in Zephyr table.
    pub fn builtin() -> Result<Self, PatternError> {
        Self::compile(&builtin::rules())
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
