//! Label classification specifications.
//!
//! Runs without a target repository, so nothing is sent anywhere.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > I2C and documentation changes map to their areas, in table order
#[test]
fn prints_labels_for_changed_files() {
    let repo = Repo::with_changes(&["drivers/i2c/i2c_foo.c", "doc/readme.rst"]);
    repo.cmd()
        .args(["-c", "base..HEAD"])
        .assert()
        .success()
        .stdout("Labels to apply: area: I2C, area: Documentation\n");
}

/// > A device tree file applies its label once
#[test]
fn device_tree_label_applied_once() {
    let repo = Repo::with_changes(&["dts/bindings/foo.dts"]);
    repo.cmd()
        .args(["-c", "base..HEAD"])
        .assert()
        .success()
        .stdout("Labels to apply: area: Device Tree\n");
}

/// > Files outside every area produce an empty list
#[test]
fn unmatched_files_produce_no_labels() {
    let repo = Repo::with_changes(&["zephyr-env.sh"]);
    repo.cmd()
        .args(["-c", "base..HEAD"])
        .assert()
        .success()
        .stdout("Labels to apply: \n");
}

/// > More than ten labels aborts cleanly with exit 0
#[test]
fn too_many_labels_aborts_successfully() {
    let repo = Repo::with_changes(&[
        "drivers/modem/a.c",
        "drivers/pwm/a.c",
        "lib/libc/a.c",
        "dts/a.dts",
        "drivers/watchdog/a.c",
        "drivers/sensor/a.c",
        "drivers/adc/a.c",
        "drivers/counter/a.c",
        "drivers/timer/a.c",
        "drivers/i2s/a.c",
        "drivers/i2c/a.c",
    ]);

    // A target without GH_TOKEN: reaching the remote step would fail.
    repo.cmd()
        .args(["-c", "base..HEAD", "-r", "zephyrproject-rtos/zephyr", "-p", "5"])
        .assert()
        .success()
        .stdout(predicates::str::ends_with("too many labels, aborting...\n"));
}

/// > --max-labels lowers the limit
#[test]
fn max_labels_flag_lowers_limit() {
    let repo = Repo::with_changes(&["drivers/i2c/i2c_foo.c", "doc/readme.rst"]);
    repo.cmd()
        .args(["-c", "base..HEAD", "--max-labels", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("too many labels, aborting..."));
}

/// > A rule file replaces the built-in table
#[test]
fn rule_file_replaces_builtin_table() {
    let repo = Repo::with_changes(&["drivers/i2c/i2c_foo.c", "tools/gen.py"]);
    let rules = repo.path().join("rules.toml");
    std::fs::write(
        &rules,
        r#"
version = 1

[[rule]]
area = "Tools"
patterns = ["^tools/", "\\.py$"]
labels = ["area: Tools", "python"]
"#,
    )
    .unwrap();

    repo.cmd()
        .args(["-c", "base..HEAD"])
        .env("AREA_LABELER_RULES", &rules)
        .assert()
        .success()
        .stdout("Labels to apply: area: Tools, python\n");
}

/// > Without a pull request number, the repository alone does nothing remote
#[test]
fn repo_without_pull_request_is_dry_run() {
    let repo = Repo::with_changes(&["kernel/sched.c"]);
    repo.cmd()
        .args(["-c", "base..HEAD", "-r", "zephyrproject-rtos/zephyr"])
        .assert()
        .success()
        .stdout("Labels to apply: area: Kernel\n");
}

/// > A repository that is not owner/name is ignored without a pull request
#[test]
fn malformed_repo_without_pull_request_is_dry_run() {
    let repo = Repo::with_changes(&["kernel/sched.c"]);
    repo.cmd()
        .args(["-c", "base..HEAD", "-r", "zephyr"])
        .assert()
        .success()
        .stdout("Labels to apply: area: Kernel\n");
}

/// > An empty repository is a dry run even with a pull request
#[test]
fn empty_repo_is_dry_run() {
    let repo = Repo::with_changes(&["kernel/sched.c"]);
    repo.cmd()
        .args(["-c", "base..HEAD", "-r", "", "-p", "5"])
        .assert()
        .success()
        .stdout("Labels to apply: area: Kernel\n");
}
