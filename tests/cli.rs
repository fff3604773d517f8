//! Tests for the `shuntcalc` binary.
//!
//! Each case runs the compiled executable and checks its stdout, stderr and
//! exit status.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use rstest::rstest;

fn run_with_args(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shuntcalc"))
        .args(args)
        .stdin(Stdio::null())
        .output()
        .unwrap_or_else(|e| panic!("failed to run shuntcalc: {e}"))
}

fn run_with_stdin(input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_shuntcalc"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("failed to spawn shuntcalc: {e}"));
    child
        .stdin
        .take()
        .unwrap_or_else(|| panic!("stdin not piped"))
        .write_all(input)
        .unwrap_or_else(|e| panic!("failed to write stdin: {e}"));
    child
        .wait_with_output()
        .unwrap_or_else(|e| panic!("failed to wait for shuntcalc: {e}"))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[rstest]
fn evaluates_each_argument() {
    let output = run_with_args(&["3+4*2", "5/0"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "11\ninf\n");
    assert_eq!(stderr(&output), "");
}

#[rstest]
fn reports_failure_after_processing_every_input() {
    let output = run_with_args(&["3+", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "1\n");
    assert_eq!(
        stderr(&output),
        "error: invalid expression: operator '+' is missing an operand\n"
    );
}

#[rstest]
fn reads_expressions_from_stdin() {
    let output = run_with_stdin(b"1+1\n2*3\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2\n6\n");
}

#[rstest]
fn unreadable_stdin_is_reported() {
    let output = run_with_stdin(b"1+1\n\xff\xfe\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "2\n");
    assert!(
        stderr(&output).starts_with("error: failed to read input:"),
        "got {:?}",
        stderr(&output)
    );
}

#[rstest]
#[case(&["--postfix", "3+4*2"], "3 4 2 * +\n")]
#[case(&["--postfix", "-2^2"], "0 2 2 ^ -\n")]
#[case(&["(1+2"], "3\n")]
fn prints_results(#[case] args: &[&str], #[case] expected: &str) {
    let output = run_with_args(args);
    assert!(output.status.success());
    assert_eq!(stdout(&output), expected);
}

#[rstest]
fn strict_flag_rejects_unbalanced_parentheses() {
    let output = run_with_args(&["--strict", "(1+2", "2"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "2\n");
    assert_eq!(stderr(&output), "error: syntax error: unclosed '(' at 0..1\n");
}
