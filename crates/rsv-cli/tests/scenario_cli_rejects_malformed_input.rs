use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

/// A bad token must fail the run and name the offending line; it is never
/// skipped or counted.
#[test]
fn cli_count_rejects_non_integer_token() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, "7 6 4 2 1\n1 2 x 4\n")?;

    Command::cargo_bin("rsv")?
        .args(["count", "--input"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("safe_reports").not())
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("'x'"));
    Ok(())
}

#[test]
fn cli_count_rejects_blank_line() -> anyhow::Result<()> {
    assert_cmd::Command::cargo_bin("rsv")?
        .args(["count", "--input", "-"])
        .write_stdin("1 2 3\n\n4 5 6\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: empty report"));
    Ok(())
}

#[test]
fn cli_count_missing_file_fails() -> anyhow::Result<()> {
    Command::cargo_bin("rsv")?
        .args(["count", "--input", "/no/such/reports.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/no/such/reports.txt"));
    Ok(())
}
