use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("bufplot").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bufplot 0.1.0"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("bufplot").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buffer size vs transfer rate"));
}

#[test]
fn test_run_creates_chart_and_prints_summary() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("bufplot").unwrap();
    cmd.current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Peak transfer rate: 25233.33 MB/s @ 32768 bytes"))
        .stdout(predicate::str::contains("Optimal buffer size: 32768 bytes"))
        .stdout(predicate::str::contains("#define OPTIMAL_MULTIPLIER 8"));

    assert!(temp_dir.path().join("bs_performance.png").exists());
}

#[test]
fn test_missing_font_falls_back_and_still_renders() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("bufplot").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("--font")
        .arg("/nonexistent/NotoSansCJK-Regular.ttc")
        .assert()
        .success()
        .stderr(predicate::str::contains("falling back"))
        .stdout(predicate::str::contains("#define OPTIMAL_MULTIPLIER 8"));

    assert!(temp_dir.path().join("bs_performance.png").exists());
}

#[test]
fn test_unwritable_output_fails_without_summary() {
    let temp_dir = TempDir::new().unwrap();
    let bad_path = temp_dir.path().join("no_such_dir").join("chart.png");
    let mut cmd = Command::cargo_bin("bufplot").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("--output")
        .arg(&bad_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("OutputWrite"))
        .stdout(predicate::str::contains("#define").not());

    assert!(!bad_path.exists());
}

#[test]
fn test_custom_output_path() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("custom.png");
    let mut cmd = Command::cargo_bin("bufplot").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.png"));

    assert!(out.exists());
}

#[test]
fn test_summary_is_stable_across_runs() {
    let temp_dir = TempDir::new().unwrap();

    let first = Command::cargo_bin("bufplot")
        .unwrap()
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    let second = Command::cargo_bin("bufplot")
        .unwrap()
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
}
