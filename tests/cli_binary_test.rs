use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

fn run_binary(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_console-calc"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_exit_choice_returns_zero() {
    let output = run_binary(&[], "0\n");
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Thank you for using the calculator!"));
}

#[test]
fn test_full_operation() {
    let output = run_binary(&[], "1\n5\n+\n3\n0\n");
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("5.00 + 3.00 = 8.00"));
}

#[test]
fn test_division_by_zero_goes_to_stderr() {
    let output = run_binary(&[], "1\n5\n/\n0\n0\n");
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout.contains("=> RESULT"));
    assert!(stderr.contains("division by zero"));
}

#[test]
fn test_settings_file_and_flag_override() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[display]\nprecision = 4\nlanguage = \"ru\"\n")
        .unwrap();
    let path = temp_file.path().to_str().unwrap();

    let output = run_binary(&["--config", path, "--precision", "1"], "1\n1\n/\n8\n0\n");
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("РЕЗУЛЬТАТ: 1.0 / 8.0 = 0.1"));
}

#[test]
fn test_invalid_precision_exits_with_error() {
    let output = run_binary(&["--precision", "99"], "0\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr).unwrap().contains("precision"));
}

#[test]
fn test_missing_settings_file_exits_with_error() {
    let output = run_binary(&["--config", "/nonexistent/console-calc.toml"], "0\n");
    assert_eq!(output.status.code(), Some(1));
}
