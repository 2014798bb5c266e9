// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Path pattern matching for rule evaluation.
//!
//! Every pattern matches from the start of a path:
//! - Plain literal (optionally `^`-prefixed): `str::starts_with`
//! - Anything else: regex crate, anchored at the start

pub mod matcher;

pub use matcher::{PathPattern, PatternError};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
