// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::github::DEFAULT_API_URL;

/// Set labels for a pull request based on files that were changed
#[derive(Debug, Parser)]
#[command(name = "area-labeler")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Commit range in the form: a..b
    // Optional here so a missing range exits with status 1, not clap's 2.
    #[arg(short = 'c', long = "commits", value_name = "RANGE")]
    pub commits: Option<String>,

    /// GitHub repository (owner/name)
    #[arg(short = 'r', long = "repo", value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    /// Pull request number
    #[arg(short = 'p', long = "pull-request", default_value_t = 0, value_name = "N")]
    pub pull_request: u64,

    /// Rule file replacing the built-in area table
    #[arg(long, env = "AREA_LABELER_RULES", value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Abort without labeling when more labels than this match (default: 10)
    #[arg(long, value_name = "N")]
    pub max_labels: Option<usize>,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL, value_name = "URL")]
    pub api_url: String,

    /// Print the active rule table and exit
    #[arg(long)]
    pub list_rules: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
