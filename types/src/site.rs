//! Guard sites and the outcome of evaluating one.

use thiserror::Error;

use crate::NonEmptyStaticStr;

/// Tag that opens every guard diagnostic on the error channel.
pub const DIAGNOSTIC_TAG: &str = "Warning: ";

/// A named guard call site.
///
/// Pairs a short identifier with a description of the suspected slow path.
/// Sites are declared as `const` items next to the computation they protect:
///
/// ```
/// use tripwire_types::GuardSite;
///
/// const LARGE_B: GuardSite = GuardSite::new("large_b", "b exceeds 9000");
///
/// assert!(LARGE_B.evaluate(9000 > 9000).is_ok());
/// assert!(LARGE_B.evaluate(9001 > 9000).is_err());
/// ```
///
/// # Invariants
///
/// - `name` and `message` are non-empty (checked at compile time for `const` sites)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuardSite {
    name: NonEmptyStaticStr,
    message: NonEmptyStaticStr,
}

impl GuardSite {
    #[must_use]
    pub const fn new(name: &'static str, message: &'static str) -> Self {
        Self {
            name: NonEmptyStaticStr::new(name),
            message: NonEmptyStaticStr::new(message),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name.as_str()
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        self.message.as_str()
    }

    /// Evaluate the site against an already computed predicate.
    ///
    /// `condition` is `true` when the slow path was detected. Evaluation is
    /// pure: a clear site returns `Ok(Clear)` and nothing else happens.
    pub const fn evaluate(self, condition: bool) -> Result<Clear, Tripped> {
        if condition {
            Err(Tripped { site: self })
        } else {
            Ok(Clear(()))
        }
    }
}

/// Witness that a guard site was evaluated with a false predicate.
///
/// Only [`GuardSite::evaluate`] constructs one. An enforcer that must hand a
/// `Clear` back to its caller can therefore return normally only from the
/// clear branch; the fired branch has to diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clear(());

/// A guard whose predicate held.
///
/// `Display` renders the one-line diagnostic written to the error channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}{} triggered - {}", DIAGNOSTIC_TAG, .site.name(), .site.message())]
pub struct Tripped {
    site: GuardSite,
}

impl Tripped {
    #[must_use]
    pub const fn site(&self) -> GuardSite {
        self.site
    }
}
