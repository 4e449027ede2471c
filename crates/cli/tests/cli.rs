use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_run_prints_yearly_tables() {
    let mut cmd = Command::cargo_bin("garenne").unwrap();
    cmd.arg("run")
        .arg("--years")
        .arg("3")
        .arg("--seed")
        .arg("42")
        .assert()
        .success()
        .stdout(predicate::str::contains("Simulation Configuration"))
        .stdout(predicate::str::contains("Year 0"))
        .stdout(predicate::str::contains("Year 2"))
        .stdout(predicate::str::contains("Females alive"))
        .stdout(predicate::str::contains("Males dead"));
}

#[test]
fn test_run_echoes_parameters() {
    let mut cmd = Command::cargo_bin("garenne").unwrap();
    cmd.arg("run")
        .arg("--years")
        .arg("2")
        .arg("--seed")
        .arg("7")
        .arg("--females")
        .arg("12")
        .arg("--males")
        .arg("8")
        .assert()
        .success()
        .stdout(predicate::str::contains("Years: 2"))
        .stdout(predicate::str::contains("Random Seed: 7"))
        .stdout(predicate::str::contains("12 females"))
        .stdout(predicate::str::contains("8 males"));
}

#[test]
fn test_same_seed_reproduces_output() {
    let run = || {
        let mut cmd = Command::cargo_bin("garenne").unwrap();
        let output = cmd
            .arg("run")
            .arg("--years")
            .arg("5")
            .arg("--seed")
            .arg("1234")
            .output()
            .unwrap();
        assert!(output.status.success());
        output.stdout
    };

    assert_eq!(run(), run());
}

#[test]
fn test_json_output_is_one_snapshot_per_year() {
    let mut cmd = Command::cargo_bin("garenne").unwrap();
    let output = cmd
        .arg("run")
        .arg("--years")
        .arg("4")
        .arg("--seed")
        .arg("99")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json_start = stdout.find("[\n").unwrap();
    let snapshots: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    assert_eq!(snapshots.as_array().unwrap().len(), 4);
}

#[test]
fn test_zero_years_is_rejected() {
    let mut cmd = Command::cargo_bin("garenne").unwrap();
    cmd.arg("run")
        .arg("--years")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize simulation"));
}

#[test]
fn test_invalid_initial_age_is_rejected() {
    let mut cmd = Command::cargo_bin("garenne").unwrap();
    cmd.arg("run")
        .arg("--years")
        .arg("2")
        .arg("--age")
        .arg("16")
        .assert()
        .failure();
}
