//! The enforcement seam and its production implementation.

use std::io;

use tripwire_types::{Clear, GuardSite, Tripped};

use crate::channel::report;
use crate::policy::TerminationPolicy;

/// Something that can enforce a guard site.
///
/// `check` returns normally only when `condition` is `false`: the [`Clear`]
/// it hands back can only come from a clear [`GuardSite::evaluate`]. Callers
/// evaluate the predicate after every value it depends on is final, and
/// before the computation it protects.
pub trait Enforce {
    fn check(&self, site: &GuardSite, condition: bool) -> Clear;
}

/// Production guard enforcer.
///
/// On a clear site this is a no-op: nothing is written and nothing is
/// mutated. On a fired site it logs, writes the diagnostic to `stderr`, and
/// applies its [`TerminationPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tripwire {
    policy: TerminationPolicy,
}

impl Tripwire {
    #[must_use]
    pub const fn new(policy: TerminationPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> TerminationPolicy {
        self.policy
    }

    pub fn fire(&self, tripped: &Tripped) -> ! {
        let site = tripped.site();
        tracing::error!(
            guard = site.name(),
            detail = site.message(),
            policy = ?self.policy,
            "Guard fired"
        );

        if !self.policy.reports_via_panic()
            && let Err(err) = report(io::stderr().lock(), tripped)
        {
            tracing::warn!(guard = site.name(), "Failed to write guard diagnostic: {err}");
        }

        self.policy.terminate(tripped)
    }
}

impl Enforce for Tripwire {
    fn check(&self, site: &GuardSite, condition: bool) -> Clear {
        match site.evaluate(condition) {
            Ok(clear) => clear,
            Err(tripped) => self.fire(&tripped),
        }
    }
}
