//! Normal runs and ordinary input errors through the binary.

use crate::common::{Sandbox, stderr, stdout};

#[test]
fn each_puzzle_prints_one_line() {
    let cases = [
        ("partitions", "10 10", "42"),
        ("grid-paths", "3 3\n1\n2 2", "2"),
        ("dice", "2 6 7", "0.583333333"),
        ("subset-sum", "6 9\n3 34 4 12 5 2", "YES"),
        ("euclid-steps", "6 4", "2"),
        ("popcount-range", "10 2", "5"),
        ("knight", "3 2 1 1", "0.062500000"),
    ];

    let sandbox = Sandbox::new();
    for (puzzle, input, expected) in cases {
        let output = sandbox.run(&[puzzle], input);
        assert!(output.status.success(), "{puzzle}: {}", stderr(&output));
        assert_eq!(stdout(&output), format!("{expected}\n"), "{puzzle}");
        assert_eq!(stderr(&output), "", "{puzzle}");
    }
}

#[test]
fn malformed_input_is_an_ordinary_error() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["partitions"], "five 9001");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    let err = stderr(&output);
    assert!(err.contains("invalid input for partitions"), "stderr: {err}");
    assert!(err.contains("invalid value for `a`"), "stderr: {err}");
    assert!(!err.contains("Warning:"), "stderr: {err}");
}

#[test]
fn list_prints_every_puzzle() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--list"], "");

    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 7);
    assert!(out.lines().any(|line| line.starts_with("knight")));
}

#[test]
fn unknown_puzzle_is_a_usage_error() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["sudoku"], "");

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unknown puzzle"));
}
