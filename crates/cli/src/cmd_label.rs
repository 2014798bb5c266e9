// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Label command implementation.

use area_labeler::apply::Target;
use area_labeler::cli::Cli;
use area_labeler::env;
use area_labeler::error::{Error, ExitCode};
use area_labeler::git;
use area_labeler::github::{GitHubClient, LabelService};
use area_labeler::runner::{Labeler, Outcome};

/// Run the label command.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    if cli.list_rules {
        let labeler = Labeler::load(cli.rules.as_deref(), cli.max_labels)?;
        labeler.list_rules(&mut std::io::stdout().lock())?;
        return Ok(ExitCode::Success);
    }

    let commits = match cli.commits.as_deref() {
        Some(range) if !range.trim().is_empty() => range,
        _ => {
            return Err(Error::Argument("a commit range is required (--commits a..b)".into()).into());
        }
    };

    let target = Target::from_args(cli.repo.as_deref(), cli.pull_request)?;

    let labeler = Labeler::load(cli.rules.as_deref(), cli.max_labels)?;

    let cwd = std::env::current_dir()?;
    let files = git::changed_files(&cwd, commits)?;

    let api_url = cli.api_url.clone();
    let connect = move || -> area_labeler::Result<Box<dyn LabelService>> {
        let token = env::github_token()?;
        Ok(Box::new(GitHubClient::new(&api_url, &token)?))
    };

    let outcome = labeler.run(
        &files,
        target.as_ref(),
        connect,
        &mut std::io::stdout().lock(),
    )?;
    if let Outcome::Applied(_, report) = &outcome {
        tracing::info!(
            "applied {} labels, {} not defined in repository",
            report.applied.len(),
            report.missing.len()
        );
    }

    Ok(ExitCode::Success)
}
