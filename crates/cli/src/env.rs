// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable names and the working-context precondition.

use crate::error::{Error, Result};

/// Generated environment variable name constants.
pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

/// Name of the variable holding the tracing filter.
pub fn log_var() -> &'static str {
    names::AREA_LABELER_LOG
}

/// Require the working-context variable to be present.
///
/// Only presence matters; the value is never read.
pub fn require_context() -> Result<()> {
    check_context(std::env::var_os(names::ZEPHYR_BASE).is_some())
}

fn check_context(present: bool) -> Result<()> {
    if present {
        Ok(())
    } else {
        Err(Error::Precondition(format!(
            "{} is not set; run from a configured Zephyr environment",
            names::ZEPHYR_BASE
        )))
    }
}

/// Read the GitHub token, failing if it is unset or empty.
pub fn github_token() -> Result<String> {
    match std::env::var(names::GH_TOKEN) {
        Ok(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(Error::Precondition(format!(
            "{} must be set to apply labels",
            names::GH_TOKEN
        ))),
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
