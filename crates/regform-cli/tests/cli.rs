//! Runs the `regform` binary end to end

use std::io::Write;
use std::process::Command;

use pretty_assertions::assert_eq;

fn regform() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_regform"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_check_accepts_valid_registration() {
    let output = regform()
        .args([
            "check",
            "--first-name",
            "Anne-Marie",
            "--last-name",
            "O'Brien",
            "--email",
            "a@b.co",
            "--password",
            "longenough",
        ])
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(output.status.success(), "{stdout}");
    assert!(stdout.contains("Registration accepted:"));
    assert!(!stdout.contains("longenough"), "password must not be printed");
}

#[test]
fn test_check_rejects_invalid_email() {
    let output = regform()
        .args([
            "check",
            "--first-name",
            "Anne-Marie",
            "--last-name",
            "O'Brien",
            "--email",
            "not-an-email",
            "--password",
            "longenough",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Please enter a valid email address"));
    assert!(stdout.contains("Registration rejected:"));
    assert!(stdout.contains("1 invalid field(s)"));
}

#[test]
fn test_check_with_no_values_reports_required() {
    let output = regform().arg("check").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("This field is required"));
    assert!(stdout.contains("Email is required"));
    assert!(stdout.contains("Password is required"));
}

#[test]
fn test_config_prints_effective_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "success_hide_delay_ms = 1200").unwrap();

    let output = regform()
        .arg("--config")
        .arg(file.path())
        .arg("config")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("success_hide_delay_ms = 1200"));
    assert!(stdout.contains("invalid_class = \"invalid\""));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let output = regform()
        .args(["--config", "/definitely/not/here.toml", "config"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}
