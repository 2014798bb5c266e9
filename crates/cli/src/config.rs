// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule file parsing and validation.
//!
//! Handles rule file TOML with version validation and unknown key warnings.
//!
//! ```toml
//! version = 1
//! max_labels = 10
//!
//! [[rule]]
//! area = "I2C"
//! patterns = ["^drivers/i2c"]
//! labels = ["area: I2C"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::rules::Rule;

/// Supported rule file version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known keys inside a `[[rule]]` table.
const KNOWN_RULE_KEYS: &[&str] = &["area", "patterns", "labels"];

/// Rule file with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    max_labels: Option<usize>,

    #[serde(default)]
    rule: Vec<toml::Table>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// A parsed rule file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesConfig {
    /// Rule file version (must be 1).
    pub version: i64,
    /// Label limit, if the file sets one.
    pub max_labels: Option<usize>,
    /// Rules in declaration order.
    pub rules: Vec<Rule>,
}

/// Load and validate a rule file.
pub fn load(path: &Path) -> Result<RulesConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse a rule file from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<RulesConfig> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = flexible
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})",
            version, SUPPORTED_VERSION
        )));
    }

    for key in flexible.unknown.keys() {
        warn_unknown_key(path, key);
    }

    if flexible.rule.is_empty() {
        return Err(config_error("no [[rule]] entries defined".to_string()));
    }

    let mut rules = Vec::with_capacity(flexible.rule.len());
    for (index, table) in flexible.rule.into_iter().enumerate() {
        for key in table.keys() {
            if !KNOWN_RULE_KEYS.contains(&key.as_str()) {
                warn_unknown_key(path, &format!("rule[{}].{}", index, key));
            }
        }

        let rule: Rule = toml::Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| config_error(format!("rule[{}]: {}", index, e)))?;

        if rule.patterns.is_empty() {
            return Err(config_error(format!(
                "rule[{}] ({}): patterns must not be empty",
                index, rule.area
            )));
        }
        if rule.labels.is_empty() {
            return Err(config_error(format!(
                "rule[{}] ({}): labels must not be empty",
                index, rule.area
            )));
        }
        rules.push(rule);
    }

    Ok(RulesConfig {
        version,
        max_labels: flexible.max_labels,
        rules,
    })
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "area-labeler: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
