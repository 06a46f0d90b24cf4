//! Configuration loading for Tripwire.
//!
//! The config file is optional. Every field has a default, so a missing file
//! and an empty file behave the same.
//!
//! ```toml
//! [guard]
//! termination = "exit"
//! exit_code = 3
//! allow_core_dumps = false
//!
//! [log]
//! filter = "debug"
//! ```

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tripwire_guard::TerminationPolicy;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TRIPWIRE_CONFIG";

/// Exit status used when `termination = "exit"` and no `exit_code` is set.
pub const DEFAULT_EXIT_CODE: i64 = 3;

/// Log filter used when neither `RUST_LOG` nor `log.filter` is set.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Default, Deserialize)]
pub struct TripwireConfig {
    pub guard: Option<GuardConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GuardConfig {
    /// How a fired guard terminates the process. Default: abort.
    #[serde(default)]
    pub termination: Termination,
    /// Exit status for `termination = "exit"`. Clamped to 1..=255.
    pub exit_code: Option<i64>,
    /// Keep the platform core-dump limit when a guard aborts. Default: false.
    #[serde(default)]
    pub allow_core_dumps: bool,
}

/// Config-facing termination mode.
///
/// Panic termination is for in-process tests and cannot be selected here.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Termination {
    #[default]
    Abort,
    Exit,
}

impl Termination {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Exit => "exit",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive string.
    pub filter: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl GuardConfig {
    #[must_use]
    pub fn policy(&self) -> TerminationPolicy {
        match self.termination {
            Termination::Abort => TerminationPolicy::Abort,
            Termination::Exit => {
                TerminationPolicy::exit(self.exit_code.unwrap_or(DEFAULT_EXIT_CODE))
            }
        }
    }
}

impl TripwireConfig {
    /// Load configuration.
    ///
    /// An explicit path (from `--config` or [`CONFIG_ENV_VAR`]) must exist. The
    /// default path (`~/.tripwire/config.toml`) is optional: when it is absent
    /// this returns `Ok(None)`.
    pub fn load(explicit: Option<&Path>) -> Result<Option<Self>, ConfigError> {
        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| env_config_path(env::var_os(CONFIG_ENV_VAR)));

        if let Some(path) = explicit {
            return Self::load_from(&path).map(Some);
        }

        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file; using defaults");
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn policy(&self) -> TerminationPolicy {
        self.guard
            .as_ref()
            .map(GuardConfig::policy)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn allow_core_dumps(&self) -> bool {
        self.guard.as_ref().is_some_and(|guard| guard.allow_core_dumps)
    }

    #[must_use]
    pub fn log_filter(&self) -> Option<&str> {
        self.log
            .as_ref()
            .and_then(|log| log.filter.as_deref())
            .map(str::trim)
            .filter(|filter| !filter.is_empty())
    }
}

fn env_config_path(raw: Option<OsString>) -> Option<PathBuf> {
    raw.filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// `~/.tripwire`, the home of the config file and logs.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tripwire"))
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("config.toml"))
}
