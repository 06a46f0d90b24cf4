//! End-to-end guard behavior through the `tripwire` binary.

use std::fs;

use crate::common::{Sandbox, assert_aborted, stderr, stdout};

const LARGE_B_DIAGNOSTIC: &str =
    "Warning: large_b triggered - b exceeds 9000, partition table grows quadratically\n";

#[test]
fn at_threshold_prints_answer_and_nothing_on_stderr() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["partitions"], "5 9000\n");

    assert!(output.status.success(), "status: {:?}", output.status);
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 1);
    assert!(out.trim().parse::<u64>().is_ok(), "stdout: {out:?}");
    assert_eq!(stderr(&output), "");
}

#[test]
fn over_threshold_aborts_with_only_the_diagnostic() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["partitions"], "5 9001\n");

    assert_aborted(&output);
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), LARGE_B_DIAGNOSTIC);
}

#[test]
fn guard_outcome_is_deterministic() {
    let sandbox = Sandbox::new();
    for input in ["5 9000", "5 9001"] {
        let first = sandbox.run(&["partitions"], input);
        let second = sandbox.run(&["partitions"], input);
        assert_eq!(first.status, second.status);
        assert_eq!(first.stdout, second.stdout);
        assert_eq!(first.stderr, second.stderr);
    }
}

#[test]
fn exit_policy_uses_configured_status() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[guard]\ntermination = \"exit\"\nexit_code = 7\n");
    let output = sandbox.run(&["partitions"], "5 9001");

    assert_eq!(output.status.code(), Some(7));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), LARGE_B_DIAGNOSTIC);
}

#[test]
fn exit_policy_defaults_to_status_three() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[guard]\ntermination = \"exit\"\n");
    let output = sandbox.run(&["subset-sum"], "40 1");

    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).starts_with("Warning: exponential_search triggered"));
}

#[test]
fn guard_fires_before_the_rest_of_the_input_is_needed() {
    // the weights are never supplied; the guard must win over the parse error
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["subset-sum"], "23 5");

    assert_aborted(&output);
    assert!(stderr(&output).starts_with("Warning: exponential_search triggered"));
}

#[test]
fn fired_guard_is_logged_to_file_not_stderr() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["euclid-steps"], "0 5");

    assert_aborted(&output);
    assert_eq!(stderr(&output).lines().count(), 1);

    let log = fs::read_to_string(sandbox.log_path()).expect("log file should exist");
    assert!(log.contains("Guard fired"), "log: {log}");
    assert!(log.contains("zero_operand"), "log: {log}");
}
