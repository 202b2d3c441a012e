use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get the planner storage path in the temp home
fn storage_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".museum").join("storage.json")
}

const BINARY_NAME: &str = "museum";

fn museum(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Portfolio museum tour and student planner"))
        .stdout(contains("planner"));
}

#[test]
/// The exclusive modal flag says where it has an effect.
fn tour_help_scopes_exclusive_modals_to_headless() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["tour", "--help"]);
    cmd.assert()
        .success()
        .stdout(contains("--exclusive-modals"))
        .stdout(contains("Only headless"));
}

#[test]
/// A fresh home shows the default dashboard.
fn planner_show_prints_defaults() {
    let home = temp_home();
    museum(&home)
        .args(["planner", "show"])
        .assert()
        .success()
        .stdout(contains("15 hrs this week"))
        .stdout(contains("3 tasks left"))
        .stdout(contains("20 July 2025"))
        .stdout(contains("(showing defaults)"));
    assert!(!storage_file_path(&home).exists());
}

#[test]
/// A saved value is shown on the next run and written under plannerData.
fn planner_set_persists_value() {
    let home = temp_home();
    museum(&home)
        .args(["planner", "set", "study-hours", "20 hrs this week"])
        .assert()
        .success()
        .stdout(contains("studyHours = 20 hrs this week"))
        .stdout(contains("storage.json"));

    let stored = fs::read_to_string(storage_file_path(&home)).unwrap();
    assert!(stored.contains("plannerData"));

    museum(&home)
        .args(["planner", "show"])
        .assert()
        .success()
        .stdout(contains("20 hrs this week"))
        .stdout(contains("3 tasks left"))
        .stdout(contains("(showing defaults)").not());
}

#[test]
/// An empty value leaves storage untouched.
fn planner_set_with_empty_value_is_a_no_op() {
    let home = temp_home();
    museum(&home)
        .args(["planner", "set", "tasks-due", "  "])
        .assert()
        .success()
        .stdout(contains("Nothing to save"));
    assert!(!storage_file_path(&home).exists());
}

#[test]
/// Reset brings the defaults back.
fn planner_reset_restores_defaults() {
    let home = temp_home();
    museum(&home)
        .args(["planner", "set", "next-exam", "1 September 2025"])
        .assert()
        .success();
    museum(&home)
        .args(["planner", "reset"])
        .assert()
        .success()
        .stdout(contains("cleared"));
    museum(&home)
        .args(["planner", "show"])
        .assert()
        .success()
        .stdout(contains("20 July 2025"))
        .stdout(contains("1 September 2025").not());
}

#[test]
/// A corrupt stored record falls back to defaults with a warning.
fn planner_show_survives_corrupt_record() {
    let home = temp_home();
    let path = storage_file_path(&home);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, r#"{"plannerData":"{not json"}"#).unwrap();

    museum(&home)
        .args(["planner", "show"])
        .assert()
        .success()
        .stdout(contains("Stored planner data is unreadable"))
        .stdout(contains("15 hrs this week"));
}

#[test]
/// --storage points the planner at another file.
fn storage_flag_overrides_default_location() {
    let home = temp_home();
    let custom = home.path().join("elsewhere.json");
    museum(&home)
        .arg("--storage")
        .arg(&custom)
        .args(["planner", "set", "tasks-due", "none left"])
        .assert()
        .success();
    assert!(custom.exists());
    assert!(!storage_file_path(&home).exists());
}

#[test]
/// Headless tour prints the effects of each command.
fn headless_tour_prints_effects() {
    let home = temp_home();
    museum(&home)
        .args(["tour", "--headless", "--no-sound"])
        .write_stdin("go projects\nexhibit ERP System | Inventory and billing\nstate\nquit\n")
        .assert()
        .success()
        .stdout(contains("show room projects"))
        .stdout(contains("show modal exhibitModal"))
        .stdout(contains("active modal: exhibitModal"))
        .stdout(contains("play Transition sound").not());
}

#[test]
/// Unknown commands are reported and the tour carries on.
fn headless_tour_ignores_unknown_commands() {
    let home = temp_home();
    museum(&home)
        .args(["tour", "--headless"])
        .write_stdin("dance\nresume\n")
        .assert()
        .success()
        .stdout(contains("unknown command 'dance'"))
        .stdout(contains("Resume download started..."))
        .stdout(contains("Ask the admin for Resume!"));
}

#[test]
/// Configure saves the flags it was given.
fn configure_writes_config_file() {
    let home = temp_home();
    museum(&home)
        .args(["configure", "--exclusive-modals", "true"])
        .assert()
        .success()
        .stdout(contains("\"exclusive_modals\": true"));
    assert!(home.path().join(".museum").join("config.json").exists());
}
