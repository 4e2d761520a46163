use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// Every run gets its own config home so the user's config is never touched.
fn ctlplane(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ctlplane"));
    cmd.env("CTLPLANE_HOME", home.path())
        .env_remove("CTLPLANE_TRACE")
        .env_remove("CTLPLANE_LOG_LEVEL")
        .env_remove("CTLPLANE_LEGACY_BIN");
    cmd
}

#[test]
fn test_no_arguments_lists_commands() {
    let home = tempfile::tempdir().unwrap();

    ctlplane(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("set-env"));
}

#[test]
fn test_help_flag() {
    let home = tempfile::tempdir().unwrap();

    ctlplane(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_command() {
    let home = tempfile::tempdir().unwrap();
    let expected = format!("ctlplane version {}", env!("CARGO_PKG_VERSION"));

    ctlplane(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn test_help_all_includes_legacy_backed_commands() {
    let home = tempfile::tempdir().unwrap();

    ctlplane(&home)
        .args(["help", "-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marketplace"))
        .stdout(predicate::str::contains("create-service"));
}

#[test]
fn test_unknown_command_is_reported_with_a_suggestion() {
    let home = tempfile::tempdir().unwrap();

    ctlplane(&home)
        .arg("verison")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'verison' is not a registered command"))
        .stderr(predicate::str::contains("version"));
}

#[test]
fn test_command_help_shows_usage() {
    let home = tempfile::tempdir().unwrap();

    ctlplane(&home)
        .args(["help", "ssh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("APP_NAME"))
        .stdout(predicate::str::contains("--app-instance-index"));
}

#[test]
fn test_set_env_with_dash_value_needs_a_target() {
    let home = tempfile::tempdir().unwrap();

    ctlplane(&home)
        .args(["set-env", "app", "KEY", "-VALUE"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No API endpoint set"))
        .stderr(predicate::str::contains("Incorrect Usage").not());
}

#[test]
fn test_unknown_flag_prints_usage() {
    let home = tempfile::tempdir().unwrap();

    ctlplane(&home)
        .args(["org-quotas", "--bogus"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Incorrect Usage"))
        .stdout(predicate::str::contains("org-quotas"));
}

#[test]
fn test_handoff_fails_cleanly_without_a_legacy_binary() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("no-such-legacy-binary");

    ctlplane(&home)
        .env("CTLPLANE_LEGACY_BIN", &missing)
        .args(["marketplace", "-e", "offering"])
        .assert()
        .code(1);
}

#[test]
fn test_api_without_a_target_reports_it() {
    let home = tempfile::tempdir().unwrap();

    ctlplane(&home)
        .arg("api")
        .assert()
        .success()
        .stdout(predicate::str::contains("No api endpoint set"));
}
