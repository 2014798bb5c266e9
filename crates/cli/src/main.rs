// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! area-labeler CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use area_labeler::cli::Cli;
use area_labeler::env;
use area_labeler::error::ExitCode;

mod cmd_label;

fn init_logging() {
    let filter = EnvFilter::try_from_env(env::log_var()).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("area-labeler: {}", e);
            match e.downcast_ref::<area_labeler::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::Failure,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    // The working context is checked before any argument parsing.
    env::require_context()?;

    let cli = Cli::parse();
    cmd_label::run(&cli)
}
