// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build script that generates env var name constants for `env.rs`.

// Build scripts should panic on failure — there is no meaningful recovery.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("env_names.rs");

    let contents = r#"
/// Environment variable: marks a Zephyr checkout as the working context (presence only).
pub const ZEPHYR_BASE: &str = "ZEPHYR_BASE";
/// Environment variable: GitHub access token used to apply labels.
pub const GH_TOKEN: &str = "GH_TOKEN";
/// Environment variable: overrides the GitHub REST API base URL.
pub const GITHUB_API_URL: &str = "GITHUB_API_URL";
/// Environment variable: path to a TOML rule file.
pub const AREA_LABELER_RULES: &str = "AREA_LABELER_RULES";
/// Environment variable: configures tracing log filter.
pub const AREA_LABELER_LOG: &str = "AREA_LABELER_LOG";
"#;

    fs::write(dest, contents).expect("failed to write env_names.rs");
}
