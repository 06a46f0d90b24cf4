//! Termination policy for a fired guard.

use std::num::NonZeroU8;
use std::process;

use tripwire_types::Tripped;

/// What a fired guard does to the process.
///
/// Every variant stops forward progress. None of them returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminationPolicy {
    /// `SIGABRT` on Unix. Destructors do not run and buffered stdout is dropped.
    #[default]
    Abort,
    /// Exit with the given non-zero status.
    Exit(NonZeroU8),
    /// Unwind with the diagnostic as the panic message.
    ///
    /// Only for in-process tests, where an abort would take the test runner down.
    Panic,
}

impl TerminationPolicy {
    /// Build an [`TerminationPolicy::Exit`] policy, clamping `code` into `1..=255`.
    #[must_use]
    pub fn exit(code: i64) -> Self {
        let clamped = code.clamp(1, i64::from(u8::MAX)) as u8;
        Self::Exit(NonZeroU8::new(clamped).unwrap_or(NonZeroU8::MIN))
    }

    /// Whether the policy writes its own diagnostic (the panic message) instead
    /// of relying on the channel writer.
    #[must_use]
    pub const fn reports_via_panic(self) -> bool {
        matches!(self, Self::Panic)
    }

    pub fn terminate(self, tripped: &Tripped) -> ! {
        match self {
            Self::Abort => process::abort(),
            Self::Exit(code) => process::exit(i32::from(code.get())),
            Self::Panic => panic!("{tripped}"),
        }
    }
}
