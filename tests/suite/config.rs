//! Config discovery and failure modes.

use std::fs;

use crate::common::{Sandbox, assert_aborted, stderr, stdout};

#[test]
fn explicit_config_flag_overrides_home_config() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[guard]\ntermination = \"exit\"\nexit_code = 9\n");

    let explicit = sandbox.home().join("abort.toml");
    fs::write(&explicit, "[guard]\ntermination = \"abort\"\n").unwrap();
    let explicit = explicit.to_string_lossy().into_owned();

    let output = sandbox.run(&["--config", &explicit, "popcount-range"], "16777217 1");
    assert_aborted(&output);
}

#[test]
fn missing_explicit_config_is_fatal() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--config", "nowhere.toml", "dice"], "1 6 3");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("failed to read config"));
}

#[test]
fn malformed_home_config_is_fatal() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[guard\n");
    let output = sandbox.run(&["dice"], "1 6 3");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to parse config"));
}

#[test]
fn log_filter_from_config_controls_log_file() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[log]\nfilter = \"off\"\n");
    let output = sandbox.run(&["dice"], "1 6 3");

    assert!(output.status.success());
    let log = fs::read_to_string(sandbox.log_path()).unwrap_or_default();
    assert!(!log.contains("Starting"), "log: {log}");
}
