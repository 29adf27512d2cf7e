//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use tactik_core::report::PriorityReport;

/// The binary, isolated from the caller's config files and environment.
fn tactik() -> Command {
    let home = Path::new(env!("CARGO_TARGET_TMPDIR")).join("empty-home");
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("tactik").unwrap();
    cmd.env("HOME", home)
        .env_remove("TACTIK_MAX_SUBJECTS")
        .env_remove("RUST_LOG");
    cmd
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not found in output:\n{haystack}"))
}

#[test]
fn plan_from_file_ranks_subjects() {
    let output = tactik()
        .args(["plan", "--file", "../../timetables/week.txt"])
        .args(["--tomorrow", "0", "--no-prompt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final Priorities with Recommendations for Monday"))
        .stdout(predicate::str::contains("Highly recommended!"))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert!(position(&stdout, "Chemistry") < position(&stdout, "Math"));
    assert!(position(&stdout, "Math") < position(&stdout, "Physics"));
    assert!(!stdout.contains("English"));
}

#[test]
fn plan_json_output() {
    let output = tactik()
        .args(["plan", "--file", "../../timetables/week.txt"])
        .args(["--tomorrow", "monday", "--no-prompt", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let ranked = json["ranked"].as_array().unwrap();
    let subjects: Vec<&str> = ranked
        .iter()
        .map(|r| r["subject"].as_str().unwrap())
        .collect();
    assert_eq!(subjects, vec!["Chemistry", "Math", "Physics"]);
    assert_eq!(ranked[0]["score"], 7);
    assert_eq!(ranked[0]["tier"], "focus");
    assert_eq!(json["tomorrow_index"], 0);
}

#[test]
fn plan_difficulty_flags_change_order() {
    let output = tactik()
        .args(["plan", "--file", "../../timetables/week.txt", "--tomorrow", "0"])
        .args(["--difficulty", "Physics=9", "--no-prompt", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["ranked"][0]["subject"], "Physics");
    assert_eq!(json["ranked"][0]["score"], 9);
}

#[test]
fn plan_prompts_for_difficulty() {
    tactik()
        .args(["plan", "--file", "../../timetables/week.txt", "--tomorrow", "0"])
        .args(["--format", "markdown"])
        .write_stdin("1\n1\n10\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Rate the difficulty"))
        .stderr(predicate::str::contains("Chemistry: "))
        .stdout(predicate::str::contains("| 1 | Chemistry |"))
        .stdout(predicate::str::contains("| 3 | Physics |"));
}

#[test]
fn plan_interactive_timetable() {
    let output = tactik()
        .args(["plan", "--tomorrow", "0", "--format", "json"])
        .write_stdin("3\nMath, Physics\nChemistry\nMath\n7\n2\n4\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter the number of days"))
        .stderr(predicate::str::contains("Enter subjects for Wednesday"))
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let subjects: Vec<&str> = json["ranked"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["subject"].as_str().unwrap())
        .collect();
    assert_eq!(subjects, vec!["Math", "Chemistry", "Physics"]);
    assert_eq!(json["days"], 3);
}

#[test]
fn plan_invalid_day_index() {
    tactik()
        .args(["plan", "--file", "../../timetables/short.txt"])
        .args(["--tomorrow", "5", "--no-prompt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid day index 5"));
}

#[test]
fn plan_interactive_rejects_bad_day_count() {
    tactik()
        .args(["plan", "--tomorrow", "0"])
        .write_stdin("12\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("number of days must be between 2 and 7"));
}

#[test]
fn plan_capacity_from_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("tactik.toml");
    std::fs::write(&config, "max_subjects = 2\n").unwrap();

    tactik()
        .args(["plan", "--file", "../../timetables/week.txt", "--tomorrow", "0"])
        .arg("--no-prompt")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many distinct subjects"));
}

#[test]
fn plan_reads_config_from_home() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("tactik");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "max_subjects = 2\n").unwrap();

    tactik()
        .env("HOME", home.path())
        .args(["plan", "--file", "../../timetables/week.txt", "--tomorrow", "0"])
        .arg("--no-prompt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("capacity is 2"));
}

#[test]
fn plan_capacity_from_env() {
    tactik()
        .env("TACTIK_MAX_SUBJECTS", "2")
        .args(["plan", "--file", "../../timetables/week.txt", "--tomorrow", "0"])
        .arg("--no-prompt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many distinct subjects"));
}

#[test]
fn rust_log_enables_debug_output() {
    tactik()
        .env("RUST_LOG", "tactik=debug")
        .args(["plan", "--file", "../../timetables/week.txt", "--tomorrow", "0"])
        .arg("--no-prompt")
        .assert()
        .success()
        .stderr(predicate::str::contains("registered 3 subject(s)"))
        .stderr(predicate::str::contains("maximum score this run: 7"));
}

#[test]
fn default_logging_is_quiet() {
    tactik()
        .args(["plan", "--file", "../../timetables/week.txt", "--tomorrow", "0"])
        .arg("--no-prompt")
        .assert()
        .success()
        .stderr(predicate::str::contains("registered").not());
}

#[test]
fn plan_saves_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out").join("report.json");

    tactik()
        .args(["plan", "--file", "../../timetables/week.txt", "--tomorrow", "0"])
        .arg("--no-prompt")
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to"));

    let report = PriorityReport::load_json(&path).unwrap();
    assert_eq!(report.ranked.len(), 3);
    assert_eq!(report.ranked[0].subject, "Chemistry");
}

#[test]
fn plan_missing_file() {
    tactik()
        .args(["plan", "--file", "no-such-timetable.txt", "--tomorrow", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn plan_rejects_unknown_format() {
    tactik()
        .args(["plan", "--file", "../../timetables/week.txt", "--tomorrow", "0"])
        .args(["--no-prompt", "--format", "html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn validate_week() {
    tactik()
        .args(["validate", "--file", "../../timetables/week.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7 days, 5 distinct subjects"))
        .stdout(predicate::str::contains("Timetable valid."));
}

#[test]
fn validate_long_file() {
    tactik()
        .args(["validate", "--file", "../../timetables/long.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 line(s) beyond the 7-day limit were ignored"))
        .stdout(predicate::str::contains("1 warning(s) found."));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    tactik()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created tactik.toml"))
        .stdout(predicate::str::contains("Created timetable.txt"));

    assert!(dir.path().join("tactik.toml").exists());
    assert!(dir.path().join("timetable.txt").exists());

    // The generated files work together
    tactik()
        .current_dir(dir.path())
        .args(["plan", "--file", "timetable.txt", "--tomorrow", "0", "--no-prompt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mathematics"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    tactik().current_dir(dir.path()).arg("init").assert().success();

    tactik()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn about_output() {
    tactik()
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommendations"));
}

#[test]
fn help_output() {
    tactik()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Study planner"));
}

#[test]
fn version_output() {
    tactik()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tactik"));
}
