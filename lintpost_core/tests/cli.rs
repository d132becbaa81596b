use std::fs;
#[cfg(target_os = "linux")]
use std::fs::OpenOptions;
#[cfg(target_os = "linux")]
use std::process::Command as StdCommand;

#[cfg(target_os = "linux")]
use assert_cmd::prelude::*;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const COMMENTS: &str = r#"{"result":{"diagnostic":{"message":"unused var","location":{"path":"main.go","range":{"start":{"line":10,"column":2}}}},"lines":["main.go:10:2: unused var"]},"tool_name":"golint"}
{"result":{"diagnostic":{"message":"no location"},"lines":[]}}
"#;

fn lintpost() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lintpost"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn unified_is_the_default_format() {
    lintpost()
        .write_stdin(COMMENTS)
        .assert()
        .success()
        .stdout("main.go:10:2: [golint] unused var\n: [] no location\n");
}

#[test]
fn raw_format_flag() {
    lintpost()
        .args(["--format", "raw"])
        .write_stdin(COMMENTS)
        .assert()
        .success()
        .stdout("main.go:10:2: unused var\n\n");
}

#[test]
fn config_supplies_default_tool_name() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("lintpost.toml");
    fs::write(&config, "default_tool_name = \"vet\"\n").expect("write config");

    lintpost()
        .arg("--config")
        .arg(&config)
        .write_stdin(COMMENTS)
        .assert()
        .success()
        .stdout(predicate::str::ends_with(": [vet] no location\n"));
}

#[test]
fn flag_overrides_config_format() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("lintpost.toml");
    fs::write(&config, "format = \"raw\"\n").expect("write config");

    lintpost()
        .arg("--config")
        .arg(&config)
        .args(["--format", "unified"])
        .write_stdin(COMMENTS)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("main.go:10:2: [golint]"));
}

#[test]
fn reads_from_input_file() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("comments.jsonl");
    fs::write(&input, COMMENTS).expect("write input");

    lintpost()
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("main.go:10:2: [golint] unused var"));
}

#[test]
fn malformed_input_fails() {
    lintpost()
        .write_stdin("{\"result\":\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid comment on input line 1"));
}

#[test]
fn unknown_format_is_rejected() {
    lintpost()
        .args(["--format", "sarif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format"));
}

#[test]
fn rust_log_enables_debug_output() {
    lintpost()
        .env("RUST_LOG", "debug")
        .write_stdin(COMMENTS)
        .assert()
        .success()
        .stderr(predicate::str::contains("posted comment"));
}

#[test]
fn rust_log_takes_precedence_over_verbose() {
    lintpost()
        .env("RUST_LOG", "error")
        .arg("--verbose")
        .write_stdin(COMMENTS)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn verbose_without_rust_log_logs_debug() {
    lintpost()
        .arg("--verbose")
        .write_stdin(COMMENTS)
        .assert()
        .success()
        .stderr(predicate::str::contains("posted comment"));
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("lintpost.toml");
    fs::write(&config, "format = [").expect("write config");

    lintpost()
        .arg("--config")
        .arg(&config)
        .write_stdin(COMMENTS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn missing_config_fails() {
    let dir = TempDir::new().expect("temp dir");

    lintpost()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .write_stdin(COMMENTS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to access"));
}

#[cfg(target_os = "linux")]
#[test]
fn write_failure_exits_non_zero() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("comments.jsonl");
    fs::write(&input, COMMENTS).expect("write input");
    let full = OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .expect("open /dev/full");

    StdCommand::new(assert_cmd::cargo::cargo_bin!("lintpost"))
        .env_remove("RUST_LOG")
        .arg("--input")
        .arg(&input)
        .stdout(full)
        .output()
        .expect("run lintpost")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write comments"));
}
