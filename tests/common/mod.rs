//! Shared test utilities and fixtures
//!
//! Every run gets its own `HOME` and working directory so config and log files
//! never leak between tests or into the developer's machine.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

pub struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("failed to create sandbox home"),
        }
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Write `~/.tripwire/config.toml` inside the sandbox.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let dir = self.home().join(".tripwire");
        fs::create_dir_all(&dir).expect("failed to create config dir");
        let path = dir.join("config.toml");
        fs::write(&path, content).expect("failed to write config");
        path
    }

    pub fn log_path(&self) -> PathBuf {
        self.home().join(".tripwire").join("logs").join("tripwire.log")
    }

    pub fn run(&self, args: &[&str], stdin: &str) -> Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_tripwire"))
            .args(args)
            .env("HOME", self.home())
            .env_remove("RUST_LOG")
            .env_remove("TRIPWIRE_CONFIG")
            .env_remove("TRIPWIRE_ALLOW_COREDUMPS")
            .current_dir(self.home())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn tripwire");

        if let Some(mut pipe) = child.stdin.take() {
            // commands like --list exit without reading stdin
            let _ = pipe.write_all(stdin.as_bytes());
        }

        child.wait_with_output().expect("failed to wait for tripwire")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Assert the run ended through the guard's abort, not a normal exit.
pub fn assert_aborted(output: &Output) {
    assert!(!output.status.success(), "expected abnormal exit");

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(
            output.status.signal(),
            Some(libc::SIGABRT),
            "expected SIGABRT, got {:?}",
            output.status
        );
    }
}
