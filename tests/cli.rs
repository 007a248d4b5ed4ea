use std::process::{Command, Output};

fn voxtrace(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_voxtrace"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("VOXTRACE_DEBUG")
        .output()
        .expect("failed to run voxtrace")
}

#[test]
fn test_traversal_lines_on_stderr() {
    let output = voxtrace(&["0", "0", "0", "5", "0", "0"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(
        lines,
        [
            "[ 0, 0, 0 ]",
            "[ 1, 0, 0 ]",
            "[ 2, 0, 0 ]",
            "[ 3, 0, 0 ]",
            "[ 4, 0, 0 ]",
            "[ 5, 0, 0 ]"
        ]
    );
}

#[test]
fn test_negative_deltas() {
    let output = voxtrace(&["1", "1", "1", "2", "-3", "1"]);
    assert_eq!(output.status.code(), Some(0));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 7);
    assert_eq!(stderr.lines().next(), Some("[ 1, 1, 1 ]"));
    assert_eq!(stderr.lines().last(), Some("[ 3, -2, 2 ]"));
}

#[test]
fn test_debug_from_environment() {
    let output = Command::new(env!("CARGO_BIN_EXE_voxtrace"))
        .args(["0", "0", "0", "2", "0", "0"])
        .env_remove("RUST_LOG")
        .env("VOXTRACE_DEBUG", "true")
        .output()
        .expect("failed to run voxtrace");
    assert_eq!(output.status.code(), Some(0));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("visited 3 voxels"));
    assert!(stderr.lines().any(|line| line == "[ 2, 0, 0 ]"));
}

#[test]
fn test_too_few_arguments() {
    let output = voxtrace(&["1", "2", "3", "4", "5"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage:"));
}

#[test]
fn test_no_arguments() {
    let output = voxtrace(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().contains("Usage:"));
}
