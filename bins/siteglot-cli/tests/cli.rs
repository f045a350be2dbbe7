use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn bin_cmd() -> Command {
    Command::cargo_bin("siteglot").expect("binary built")
}

#[test]
fn no_command_prints_usage_and_exits_clean() {
    bin_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("create-translation"));
}

#[test]
fn help_lists_all_commands() {
    bin_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("create-editor"))
        .stdout(predicate::str::contains("open-editor"))
        .stdout(predicate::str::contains("create-translation"));
}

#[test]
fn create_editor_skip_scan_without_source_fails_fast() {
    // Configuration error: reported before any filesystem or network access.
    bin_cmd()
        .args(["create-editor", "mysite", "--skip-scan"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--skip-scan is set"));
}

#[test]
fn create_translation_skip_scan_without_source_fails_fast() {
    bin_cmd()
        .args(["create-translation", "mysite", "fr", "--skip-scan"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--skip-scan is set"));
}

#[test]
fn open_editor_skip_scan_without_source_fails_fast() {
    bin_cmd()
        .args(["open-editor", "mysite", "--skip-scan"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--skip-scan is set"));
}

#[test]
fn create_translation_requires_locale_argument() {
    bin_cmd()
        .args(["create-translation", "mysite"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("LOCALE"));
}

#[test]
fn unknown_command_is_rejected() {
    bin_cmd()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand").or(
            predicate::str::contains("invalid"),
        ));
}

#[test]
fn camel_case_aliases_are_accepted() {
    // --skipScan parses (and then fails validation, proving it was applied).
    bin_cmd()
        .args(["create-editor", "mysite", "--skipScan"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--skip-scan is set"));
}

#[test]
fn out_file_default_is_visible_in_help() {
    bin_cmd()
        .args(["create-translation", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[locale].js"));
}
