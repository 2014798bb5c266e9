pub mod apply;
pub mod classify;
pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod git;
pub mod github;
pub mod pattern;
pub mod rules;
pub mod runner;

pub use apply::{ApplyReport, Target, apply_labels};
pub use classify::{DEFAULT_MAX_LABELS, LabelSet, classify};
pub use cli::Cli;
pub use error::{Error, ExitCode, Result};
pub use github::{GitHubClient, Label, LabelService, PullRequest, RepoSlug};
pub use rules::{Rule, RuleSet};
pub use runner::{Labeler, Outcome};
