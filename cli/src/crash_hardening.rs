//! Core-dump suppression for guard aborts.
//!
//! A fired guard aborts on purpose, so the resulting `SIGABRT` is not a crash
//! worth a core file. Unless allowed by config or environment, the core limit
//! is dropped to zero before any solver runs.

#[cfg(windows)]
use anyhow::bail;
use anyhow::{Context, Result};
use std::env;
#[cfg(unix)]
use std::io;

const TRIPWIRE_ALLOW_COREDUMPS: &str = "TRIPWIRE_ALLOW_COREDUMPS";

pub fn apply(allowed_by_config: bool) -> Result<()> {
    if allowed_by_config || coredumps_allowed_by_override() {
        tracing::warn!(
            env_var = TRIPWIRE_ALLOW_COREDUMPS,
            allowed_by_config,
            "Core dumps left enabled for guard aborts"
        );
        return Ok(());
    }

    apply_platform_hardening().context("failed to suppress core dumps")?;
    tracing::debug!("Core dumps suppressed for guard aborts");
    Ok(())
}

fn coredumps_allowed_by_override() -> bool {
    match env::var(TRIPWIRE_ALLOW_COREDUMPS) {
        Ok(raw) => is_truthy(raw.as_str()),
        Err(_) => false,
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

#[cfg(unix)]
fn apply_platform_hardening() -> Result<()> {
    set_rlimit_core_zero().context("setrlimit(RLIMIT_CORE=0) failed")
}

#[cfg(unix)]
fn set_rlimit_core_zero() -> io::Result<()> {
    let limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    let rc = unsafe { libc::setrlimit(libc::RLIMIT_CORE, &raw const limit) };
    if rc == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

// abort() raises the fault-reporting dialog on Windows
#[cfg(windows)]
fn apply_platform_hardening() -> Result<()> {
    use windows_sys::Win32::System::Diagnostics::Debug::{
        SEM_FAILCRITICALERRORS, SEM_NOGPFAULTERRORBOX, SetErrorMode,
    };
    use windows_sys::Win32::System::ErrorReporting::{WER_FAULT_REPORTING_NO_UI, WerSetFlags};

    unsafe {
        let _ = SetErrorMode(SEM_FAILCRITICALERRORS | SEM_NOGPFAULTERRORBOX);
        let hr = WerSetFlags(WER_FAULT_REPORTING_NO_UI);
        if hr < 0 {
            bail!("WerSetFlags failed with HRESULT 0x{:08X}", hr as u32);
        }
    }

    Ok(())
}

#[cfg(not(any(unix, windows)))]
fn apply_platform_hardening() -> Result<()> {
    Ok(())
}
