use std::process::Command;

fn binary_output(args: &[&str]) -> std::process::Output {
    let path = env!("CARGO_BIN_EXE_statuslog");
    Command::new(path)
        .args(args)
        .output()
        .unwrap_or_else(|error| panic!("failed to run {}: {}", path, error))
}

fn stdout_utf8(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

fn stderr_utf8(output: &std::process::Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is UTF-8")
}

#[test]
fn statuslog_help_lists_usage() {
    let output = binary_output(&["--help"]);
    assert!(output.status.success(), "--help should succeed");
    assert!(
        output.stderr.is_empty(),
        "help output should not write to stderr"
    );
    let stdout = stdout_utf8(&output);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("statuslog"));
}

#[test]
fn statuslog_rejects_unknown_flag() {
    let output = binary_output(&["--definitely-not-a-flag"]);
    assert!(!output.status.success(), "unknown flags should fail");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn clean_scan_succeeds_quietly() {
    let output = binary_output(&["20", "30"]);
    assert!(output.status.success());
    assert!(
        output.stderr.is_empty(),
        "nothing should be logged without verbosity or findings"
    );
    assert!(stdout_utf8(&output).starts_with("ok extra attributes: scanned=2, threshold=10"));
}

#[test]
fn verbose_and_debug_lines_are_annotated() {
    let output = binary_output(&["-vv", "--debug", "scan", "3", "12"]);
    assert!(output.status.success());

    let stderr = stderr_utf8(&output);
    assert!(stderr.contains("statuslog: INFO: statuslog.rs:"));
    assert!(stderr.contains("scan debugging enabled"));
    assert!(stderr.contains(": scanning 2 readings"));
    assert!(stderr.contains("statuslog: DEBUG: statuslog.rs:"));
    assert!(stderr.contains(": passing [12]"));
}

#[test]
fn single_verbosity_hides_level_two() {
    let output = binary_output(&["-v", "3"]);
    let stderr = stderr_utf8(&output);
    assert!(stderr.contains(": scanning 1 readings"));
    assert!(!stderr.contains(": passing"));
}

#[test]
fn requested_failure_exits_nonzero() {
    let output = binary_output(&["--fail", "50"]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = stdout_utf8(&output);
    assert!(stdout.starts_with("errors: statuslog.rs:"));
    assert!(stdout.contains("payload withheld"));
    assert!(stderr_utf8(&output).contains("statuslog: ERROR: statuslog.rs:"));
}

#[test]
fn missing_readings_warn() {
    let output = binary_output(&[]);
    assert!(output.status.success());
    assert!(stdout_utf8(&output).starts_with("warnings: statuslog.rs:"));
    assert!(stderr_utf8(&output).contains(": scan: statuslog.rs:"));
}
